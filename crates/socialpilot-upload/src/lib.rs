//! Multi-platform distribution API client for SocialPilot.
//!
//! Performs one multipart upload per post and reports a structured outcome.
//! Retry policy belongs to the caller; this client never retries.

mod client;
mod error;

pub use client::{PostMetadata, PublishReceipt, Publisher, UploadClient, view_url};
pub use error::{MAX_ERROR_BODY_LEN, UploadError, truncate_body};
