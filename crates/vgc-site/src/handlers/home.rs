//! Home Page Handler

use axum::extract::State;
use axum::response::IntoResponse;
use vgc_cms::views::home;

use crate::error::SiteResult;
use crate::state::AppState;
use crate::templates::{HomeTemplate, Layout};

/// Handler for the landing page.
pub async fn home(State(state): State<AppState>) -> SiteResult<impl IntoResponse> {
    let pages = state.cms().pages().await?;
    let view = home::map(&pages, state.cms().media())?;
    let chrome = state.chrome(Some(&pages)).await;

    Ok(HomeTemplate {
        layout: Layout::new(&state, chrome, view.meta.clone()),
        view,
    })
}
