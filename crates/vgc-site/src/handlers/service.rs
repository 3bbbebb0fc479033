//! Service Handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Form;
use serde::Deserialize;
use vgc_cms::views::service;
use vgc_cms::ContactSubmission;

use crate::error::{SiteError, SiteResult};
use crate::state::AppState;
use crate::templates::{Layout, Notice, ServiceDetailTemplate, ServiceListTemplate};

/// Slug of the service behind `/business-support`.
pub const BUSINESS_SUPPORT: &str = "business-support";

/// Consultation request posted from the service list.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConsultationRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

impl ConsultationRequest {
    pub fn submission(&self) -> ContactSubmission {
        ContactSubmission::new(self.name.trim(), self.message.trim())
            .with_phone(self.phone.as_str())
            .with_email(self.email.as_str())
            .with_service(self.service.as_str())
    }
}

/// Handler for the service list.
pub async fn service_index(State(state): State<AppState>) -> SiteResult<Response> {
    render_list(&state, StatusCode::OK, None).await
}

/// Handler for consultation requests.
pub async fn service_request(
    State(state): State<AppState>,
    Form(request): Form<ConsultationRequest>,
) -> SiteResult<Response> {
    let (status, notice) = super::submit(&state, &request.submission()).await;
    render_list(&state, status, Some(notice)).await
}

async fn render_list(state: &AppState, status: StatusCode, notice: Option<Notice>) -> SiteResult<Response> {
    let pages = state.cms().pages().await?;
    let view = service::list(&pages, state.cms().media());
    let chrome = state.chrome(Some(&pages)).await;

    let template = ServiceListTemplate {
        layout: Layout::new(state, chrome, view.meta.clone()),
        view,
        notice,
    };
    Ok((status, template).into_response())
}

/// Handler for a service detail page.
pub async fn service_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> SiteResult<impl IntoResponse> {
    render_detail(&state, &slug).await
}

/// Handler for `/business-support`.
pub async fn business_support(State(state): State<AppState>) -> SiteResult<impl IntoResponse> {
    render_detail(&state, BUSINESS_SUPPORT).await
}

async fn render_detail(state: &AppState, slug: &str) -> SiteResult<ServiceDetailTemplate> {
    let pages = state.cms().pages().await?;
    let view = service::detail(&pages, slug, state.cms().media()).ok_or(SiteError::NotFound)?;
    let chrome = state.chrome(Some(&pages)).await;

    Ok(ServiceDetailTemplate {
        layout: Layout::new(state, chrome, view.meta.clone()),
        view,
    })
}
