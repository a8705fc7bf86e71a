//! Error types for the enrichment client.

use thiserror::Error;

/// Errors that can occur when generating post metadata.
#[derive(Debug, Error)]
pub enum EnrichError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The model API returned a non-success response.
    #[error("model API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The response did not contain parseable structured output.
    #[error("invalid model response: {0}")]
    InvalidResponse(String),
}
