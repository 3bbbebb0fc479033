//! Request Handlers
//!
//! One module per page. Handlers fetch the CMS pages, hand them to the
//! matching mapper in `vgc_cms::views` and render the result.

pub mod about;
pub mod api;
pub mod blog;
pub mod career;
pub mod contact;
pub mod home;
pub mod service;

use axum::http::StatusCode;
use tracing::{info, warn};
use vgc_cms::{CmsError, ContactSubmission};

use crate::error::SiteError;
use crate::state::AppState;
use crate::templates::Notice;

const THANK_YOU: &str = "Thank you! Your message has been sent and we will be in touch shortly.";
const SEND_FAILED: &str = "We could not send your message right now. Please try again later.";

/// Fallback for unknown paths.
pub async fn not_found() -> SiteError {
    SiteError::NotFound
}

/// Forwards a form post to the CMS and describes the outcome for the
/// re-rendered page.
pub(crate) async fn submit(state: &AppState, submission: &ContactSubmission) -> (StatusCode, Notice) {
    match state.cms().submit_contact(submission).await {
        Ok(()) => {
            info!(name = %submission.name, "enquiry forwarded to CMS");
            (StatusCode::OK, Notice::success(THANK_YOU))
        }
        Err(CmsError::Invalid(reason)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Notice::error(format!("Please check the form: {reason}.")),
        ),
        Err(CmsError::Rejected(reason)) => (StatusCode::UNPROCESSABLE_ENTITY, Notice::error(reason)),
        Err(err) => {
            warn!(error = %err, "could not forward enquiry");
            (StatusCode::BAD_GATEWAY, Notice::error(SEND_FAILED))
        }
    }
}
