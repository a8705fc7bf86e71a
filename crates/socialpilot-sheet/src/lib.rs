//! Spreadsheet row data source for SocialPilot.
//!
//! This crate owns the row model and the single canonical column layout:
//! - `PostRecord` / `PostStatus`: one schedulable row, normalized at the
//!   source boundary (no raw status strings leak into the core)
//! - `SheetClient`: Google Sheets values API client with partial-cell writes
//! - `RowSource`: the seam the reconciler is generic over

mod client;
pub mod columns;
mod error;
mod record;

pub use client::{RowSource, SheetClient};
pub use error::SheetError;
pub use record::{PostRecord, PostStatus, parse_scheduled_at};
