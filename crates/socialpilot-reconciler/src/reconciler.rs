//! Reconciler pass implementation.

use std::time::{Duration, Instant};

use chrono::Utc;
use tracing::{debug, error, info, warn};

use socialpilot_drive::MediaSource;
use socialpilot_sheet::{PostRecord, PostStatus, RowSource};
use socialpilot_upload::{PostMetadata, Publisher, view_url};

use crate::ReconcileError;

/// Note written to a row on a successful publish.
pub const SUCCESS_NOTE: &str = "Auto-posted successfully";

/// Counters and timing for one pass. `processed == succeeded + failed`
/// always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassSummary {
    /// Rows that were due and attempted.
    pub processed: u32,
    /// Rows that ended the pass as `Posted`.
    pub succeeded: u32,
    /// Rows that ended the pass as `Failed`.
    pub failed: u32,
    /// Wall-clock duration of the pass.
    pub duration: Duration,
}

/// Drives due rows through fetch → publish → persist, one at a time.
///
/// Rows are processed sequentially in listing order; the bottleneck is
/// external network I/O, and sequential writes keep the sheet backend's
/// rate limits happy. Every row transitions at most once per pass.
pub struct Reconciler<S, M, P> {
    sheet: S,
    media: M,
    publisher: P,
}

impl<S, M, P> Reconciler<S, M, P>
where
    S: RowSource,
    M: MediaSource,
    P: Publisher,
{
    pub fn new(sheet: S, media: M, publisher: P) -> Self {
        Self {
            sheet,
            media,
            publisher,
        }
    }

    /// Run one pass.
    ///
    /// Returns `Err` only when listing the rows fails; in that case nothing
    /// was processed and nothing was written. Row-scoped failures are
    /// recorded on the row and counted, never propagated.
    pub async fn run_pass(&self) -> Result<PassSummary, ReconcileError> {
        let started = Instant::now();
        info!("reconcile pass started");

        let rows = self.sheet.list_rows().await?;

        // One snapshot for the whole pass, so slow rows cannot grow the
        // due-set for rows later in the listing.
        let now = Utc::now();

        let mut summary = PassSummary::default();
        for row in rows {
            if row.status != Some(PostStatus::Scheduled) {
                continue;
            }
            if row.scheduled_at.is_none() {
                // Unparseable schedule: skip, never a false "due".
                debug!(row = row.row_index, "schedule time missing or unparseable, skipping");
                continue;
            }
            if !row.is_due(now) {
                continue;
            }

            summary.processed += 1;
            info!(row = row.row_index, title = %row.title, "processing due post");

            match self.publish_row(&row).await {
                Ok(url) => {
                    self.persist_outcome(row.row_index, PostStatus::Posted, SUCCESS_NOTE, Some(&url))
                        .await;
                    summary.succeeded += 1;
                }
                Err(message) => {
                    warn!(row = row.row_index, title = %row.title, error = %message, "post failed");
                    self.persist_outcome(row.row_index, PostStatus::Failed, &message, None)
                        .await;
                    summary.failed += 1;
                }
            }
        }

        summary.duration = started.elapsed();
        info!(
            processed = summary.processed,
            succeeded = summary.succeeded,
            failed = summary.failed,
            duration_ms = summary.duration.as_millis() as u64,
            "reconcile pass completed"
        );
        Ok(summary)
    }

    /// Fetch and publish one row. Returns the display URL on success and the
    /// diagnostic message (bounded by the upload client) on failure.
    async fn publish_row(&self, row: &PostRecord) -> Result<String, String> {
        if row.platforms.is_empty() {
            return Err("no target platforms configured".to_string());
        }

        let video = self
            .media
            .fetch(&row.media_reference)
            .await
            .map_err(|e| e.to_string())?;

        let meta = PostMetadata {
            title: row.title.clone(),
            description: row.description.clone(),
            platforms: row.platforms.clone(),
        };
        let receipt = self
            .publisher
            .publish(video, &meta)
            .await
            .map_err(|e| e.to_string())?;

        Ok(receipt.url.unwrap_or_else(|| view_url(&receipt.id)))
    }

    /// Persist a terminal outcome. A write failure is logged and contained:
    /// on the success path the platform already holds the content, and the
    /// sheet keeps the stale status until an operator fixes it.
    async fn persist_outcome(
        &self,
        row_index: u32,
        status: PostStatus,
        notes: &str,
        result_url: Option<&str>,
    ) {
        if let Err(e) = self
            .sheet
            .update_row(row_index, status, notes, result_url)
            .await
        {
            error!(row = row_index, status = %status, error = %e, "failed to persist outcome");
        }
    }
}
