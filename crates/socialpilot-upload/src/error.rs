//! Error types for the distribution client.

use thiserror::Error;

/// Upper bound on the raw response body carried in an API error. Long enough
/// to be diagnostic in a sheet cell, short enough to stay readable.
pub const MAX_ERROR_BODY_LEN: usize = 160;

/// Truncate a raw response body to [`MAX_ERROR_BODY_LEN`] characters.
pub fn truncate_body(body: &str) -> String {
    if body.chars().count() <= MAX_ERROR_BODY_LEN {
        return body.to_string();
    }
    let truncated: String = body.chars().take(MAX_ERROR_BODY_LEN).collect();
    format!("{truncated}…")
}

/// Errors that can occur when publishing through the distribution API.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The API returned a non-success response. The body is truncated at
    /// construction so the message stays bounded wherever it ends up.
    #[error("distribution API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// Network-level failure before any response arrived.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The success response did not have the expected shape.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl UploadError {
    /// Build an API error with a bounded body excerpt.
    pub fn api(status: u16, raw_body: &str) -> Self {
        Self::Api {
            status,
            body: truncate_body(raw_body),
        }
    }
}
