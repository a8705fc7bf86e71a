//! Error types for the reconciler.

use thiserror::Error;

/// Pass-fatal errors. Row-scoped failures are contained inside the pass and
/// never surface here.
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// Listing the rows failed; the pass is aborted before any row is
    /// touched.
    #[error("failed to list rows: {0}")]
    Source(#[from] socialpilot_sheet::SheetError),
}
