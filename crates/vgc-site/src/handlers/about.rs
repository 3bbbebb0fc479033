//! About Page Handler

use axum::extract::State;
use axum::response::IntoResponse;
use vgc_cms::views::about;
use vgc_cms::CmsError;

use crate::error::SiteResult;
use crate::state::AppState;
use crate::templates::{AboutTemplate, Layout};

/// Handler for `/about-us` and `/about`.
pub async fn about(State(state): State<AppState>) -> SiteResult<impl IntoResponse> {
    let pages = state.cms().pages().await?;
    let view = about::map(&pages, state.cms().media())
        .ok_or_else(|| CmsError::MissingPage("about".to_string()))?;
    let chrome = state.chrome(Some(&pages)).await;

    Ok(AboutTemplate {
        layout: Layout::new(&state, chrome, view.meta.clone()),
        view,
    })
}
