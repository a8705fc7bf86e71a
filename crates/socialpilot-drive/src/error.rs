//! Error types for the media fetcher.

use thiserror::Error;

/// Errors that can occur when resolving media.
#[derive(Debug, Error)]
pub enum MediaError {
    /// The reference does not contain a recognizable file id.
    #[error("invalid media reference: could not extract a file id from {0:?}")]
    InvalidReference(String),

    /// HTTP request failed.
    #[error("media fetch failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The drive API refused the request (missing file, no permission).
    #[error("drive API error ({status}): {body}")]
    Api { status: u16, body: String },
}
