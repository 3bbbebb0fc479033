//! Career Handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Form;
use serde::Deserialize;
use vgc_cms::views::career;
use vgc_cms::ContactSubmission;

use crate::error::SiteResult;
use crate::state::AppState;
use crate::templates::{CareerTemplate, Layout, Notice};

/// Job application posted from the career page.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct JobApplication {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub position: String,
    pub linkedin: String,
    pub degree: String,
    pub personal_note: String,
}

impl JobApplication {
    /// The application as a CMS enquiry. Fields without a slot of their own
    /// are folded into the message.
    pub fn submission(&self) -> ContactSubmission {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());

        let mut message = String::from("Job application");
        for (label, value) in [
            ("Position", &self.position),
            ("City", &self.city),
            ("LinkedIn", &self.linkedin),
            ("Degree", &self.degree),
        ] {
            if !value.trim().is_empty() {
                message.push_str(&format!("\n{label}: {}", value.trim()));
            }
        }
        if !self.personal_note.trim().is_empty() {
            message.push_str("\n\n");
            message.push_str(self.personal_note.trim());
        }

        ContactSubmission::new(name.trim(), message)
            .with_email(self.email.as_str())
            .with_phone(self.phone.as_str())
            .with_service(self.position.as_str())
    }
}

/// Handler for the career page.
pub async fn career_page(State(state): State<AppState>) -> SiteResult<Response> {
    render(&state, StatusCode::OK, None).await
}

/// Handler for job applications.
pub async fn career_apply(
    State(state): State<AppState>,
    Form(application): Form<JobApplication>,
) -> SiteResult<Response> {
    let (status, notice) = super::submit(&state, &application.submission()).await;
    render(&state, status, Some(notice)).await
}

async fn render(state: &AppState, status: StatusCode, notice: Option<Notice>) -> SiteResult<Response> {
    let pages = state.cms().pages().await?;
    let view = career::map(&pages, state.cms().media());
    let chrome = state.chrome(Some(&pages)).await;

    let template = CareerTemplate {
        layout: Layout::new(state, chrome, view.meta.clone()),
        view,
        notice,
    };
    Ok((status, template).into_response())
}
