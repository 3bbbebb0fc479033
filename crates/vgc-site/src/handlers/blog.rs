//! Blog Handlers

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use vgc_cms::views::blog;

use crate::error::{SiteError, SiteResult};
use crate::state::AppState;
use crate::templates::{BlogListTemplate, BlogPostTemplate, Layout};

/// Handler for the blog index page.
pub async fn blog_index(State(state): State<AppState>) -> SiteResult<impl IntoResponse> {
    let pages = state.cms().pages().await?;
    let view = blog::list(&pages, state.cms().media());
    let chrome = state.chrome(Some(&pages)).await;

    Ok(BlogListTemplate {
        layout: Layout::new(&state, chrome, view.meta.clone()),
        view,
    })
}

/// Handler for individual blog posts.
pub async fn blog_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> SiteResult<impl IntoResponse> {
    let pages = state.cms().pages().await?;
    let view = blog::post(&pages, &slug, state.cms().media()).ok_or(SiteError::NotFound)?;
    let chrome = state.chrome(Some(&pages)).await;

    Ok(BlogPostTemplate {
        layout: Layout::new(&state, chrome, view.meta.clone()),
        view,
    })
}
