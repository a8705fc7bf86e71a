//! Batch reconciler for SocialPilot.
//!
//! The core of the system: one *pass* loads all rows from the sheet, filters
//! the due ones against a single snapshot of "now", and drives each due row
//! through fetch → publish → persist with per-row isolation. One bad row
//! never aborts the batch. The recurring trigger fires passes on a fixed
//! period and can never overlap them.

mod error;
mod reconciler;
mod trigger;

pub use error::ReconcileError;
pub use reconciler::{PassSummary, Reconciler, SUCCESS_NOTE};
pub use trigger::run_trigger;
