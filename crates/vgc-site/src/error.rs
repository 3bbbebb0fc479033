//! Site error types.

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};
use vgc_cms::views::PageMeta;
use vgc_cms::CmsError;

use crate::config::DEFAULT_SITE_NAME;
use crate::state::AppState;
use crate::templates::{Layout, NotFoundTemplate, UnavailableTemplate};

/// Result type for site operations.
pub type SiteResult<T> = Result<T, SiteError>;

/// Errors surfaced by handlers and server setup.
#[derive(Debug, Error)]
pub enum SiteError {
    /// Content could not be fetched or shaped.
    #[error("content unavailable: {0}")]
    Cms(#[from] CmsError),

    /// No page at this path.
    #[error("page not found")]
    NotFound,

    /// A configuration value could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Binding or serving failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// An error page rendered inside the site layout. Settings may be the very
/// thing that failed, so these pages use the built-in header and footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorPage {
    NotFound,
    Unavailable,
}

impl ErrorPage {
    pub fn render(self, site_name: &str) -> Response {
        let mut response = match self {
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                NotFoundTemplate {
                    layout: Layout::fallback(PageMeta::titled("Page Not Found"), site_name),
                },
            )
                .into_response(),
            Self::Unavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                UnavailableTemplate {
                    layout: Layout::fallback(PageMeta::titled("Temporarily Unavailable"), site_name),
                },
            )
                .into_response(),
        };
        response.extensions_mut().insert(self);
        response
    }
}

impl IntoResponse for SiteError {
    /// Error pages carry the default site name here; [`brand_error_pages`]
    /// swaps in the configured one.
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => ErrorPage::NotFound.render(DEFAULT_SITE_NAME),
            Self::Cms(err) => {
                error!(error = %err, "CMS content unavailable");
                ErrorPage::Unavailable.render(DEFAULT_SITE_NAME)
            }
            other => {
                warn!(error = %other, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
        }
    }
}

/// Re-renders error pages under the configured site name.
pub async fn brand_error_pages(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    let site_name = state.config().site_name.as_str();
    match response.extensions().get::<ErrorPage>().copied() {
        Some(page) if site_name != DEFAULT_SITE_NAME => page.render(site_name),
        _ => response,
    }
}
