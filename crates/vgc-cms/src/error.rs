//! CMS error types.

use thiserror::Error;

/// Maximum number of response body characters kept in a status error.
pub const MAX_ERROR_BODY: usize = 2000;

/// Result type for CMS operations.
pub type CmsResult<T> = Result<T, CmsError>;

/// Errors that can occur while talking to the CMS or shaping its content.
#[derive(Debug, Error)]
pub enum CmsError {
    /// Transport failure (connect, TLS, body read).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The request did not complete within the configured timeout.
    #[error("request to {url} timed out")]
    Timeout { url: String },

    /// The CMS answered with a non-success status.
    #[error("cms returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not the JSON we expected.
    #[error("invalid cms payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// A page the site depends on is missing from the CMS.
    #[error("no page with slug '{0}' found")]
    MissingPage(String),

    /// A form submission is missing required fields.
    #[error("invalid submission: {0}")]
    Invalid(String),

    /// The CMS refused a submission.
    #[error("submission rejected: {0}")]
    Rejected(String),
}

impl CmsError {
    /// Creates a status error, truncating the body.
    pub fn status(status: u16, body: impl AsRef<str>) -> Self {
        Self::Status {
            status,
            body: body.as_ref().chars().take(MAX_ERROR_BODY).collect(),
        }
    }

    /// Returns true if the error came from the transport rather than the payload.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Timeout { .. } | Self::Status { .. })
    }
}
