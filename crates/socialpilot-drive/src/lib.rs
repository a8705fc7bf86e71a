//! Streaming media fetcher for SocialPilot.
//!
//! Resolves an opaque media reference (a drive share link) to a byte stream.
//! Videos can exceed available memory, so the contract is a stream, never a
//! buffer.

mod client;
mod error;

pub use client::{ByteStream, DriveClient, MediaSource, extract_file_id};
pub use error::MediaError;
