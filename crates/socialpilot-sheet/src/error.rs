//! Error types for the sheet client.

use thiserror::Error;

/// Errors that can occur when reading or writing the posting sheet.
#[derive(Debug, Error)]
pub enum SheetError {
    /// The backing store could not be reached or refused the request.
    #[error("sheet unavailable: {0}")]
    Unavailable(String),

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The Sheets API returned a non-success response.
    #[error("sheet API error ({status}): {body}")]
    Api { status: u16, body: String },
}
