//! AI caption and hashtag generation.
//!
//! A single-call enrichment helper used by composer flows. Never on the
//! reconciler's critical path: callers treat a failure as "no suggestion".

mod client;
mod error;

pub use client::{EnrichClient, EnrichedMetadata};
pub use error::EnrichError;
