//! Contact Handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Form;
use serde::Deserialize;
use vgc_cms::views::contact;
use vgc_cms::ContactSubmission;

use crate::error::SiteResult;
use crate::state::AppState;
use crate::templates::{ContactTemplate, Layout, Notice};

/// Enquiry posted from the contact page.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactEnquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactEnquiry {
    pub fn submission(&self) -> ContactSubmission {
        ContactSubmission::new(self.name.trim(), self.message.trim())
            .with_email(self.email.as_str())
            .with_phone(self.phone.as_str())
    }
}

/// Handler for the contact page.
pub async fn contact_page(State(state): State<AppState>) -> SiteResult<Response> {
    render(&state, StatusCode::OK, None).await
}

/// Handler for contact form posts.
pub async fn contact_submit(
    State(state): State<AppState>,
    Form(enquiry): Form<ContactEnquiry>,
) -> SiteResult<Response> {
    let (status, notice) = super::submit(&state, &enquiry.submission()).await;
    render(&state, status, Some(notice)).await
}

async fn render(state: &AppState, status: StatusCode, notice: Option<Notice>) -> SiteResult<Response> {
    let pages = state.cms().pages().await?;
    let view = contact::map(&pages, state.cms().media());
    let chrome = state.chrome(Some(&pages)).await;

    let template = ContactTemplate {
        layout: Layout::new(state, chrome, view.meta.clone()),
        view,
        notice,
    };
    Ok((status, template).into_response())
}
