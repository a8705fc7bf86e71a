//! Row model for scheduled posts.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::columns;

/// Lifecycle status of a post row.
///
/// Parsed case-insensitively at the source boundary so the core never
/// compares raw status strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    /// Awaiting human review.
    Review,
    /// Being drafted, not yet schedulable.
    Draft,
    /// Approved and waiting for a schedule time.
    ReadyToPost,
    /// Scheduled; picked up by the reconciler once due.
    Scheduled,
    /// Terminal: published successfully.
    Posted,
    /// Terminal: the last processing attempt failed.
    Failed,
}

impl PostStatus {
    /// Parse a raw status cell. Returns `None` for unrecognized strings,
    /// which makes the row permanently unprocessable rather than guessing.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "review" => Some(Self::Review),
            "draft" => Some(Self::Draft),
            "ready to post" | "readytopost" | "ready" => Some(Self::ReadyToPost),
            "scheduled" => Some(Self::Scheduled),
            "posted" => Some(Self::Posted),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }

    /// Canonical spelling written back to the sheet.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Review => "Review",
            Self::Draft => "Draft",
            Self::ReadyToPost => "Ready to Post",
            Self::Scheduled => "Scheduled",
            Self::Posted => "Posted",
            Self::Failed => "Failed",
        }
    }
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of schedulable work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRecord {
    /// 1-based sheet row, used for targeted cell writes.
    pub row_index: u32,
    /// External identifier, assigned at row creation.
    pub id: String,
    pub media_name: String,
    /// Opaque locator resolved by the drive client.
    pub media_reference: String,
    pub title: String,
    pub description: String,
    pub tags: String,
    /// Target platform identifiers (trimmed, empties dropped).
    pub platforms: Vec<String>,
    /// `None` when the status cell holds an unrecognized string.
    pub status: Option<PostStatus>,
    /// `None` when the schedule cell is missing or unparseable; such rows
    /// are never due.
    pub scheduled_at: Option<DateTime<Utc>>,
    pub result_url: String,
    pub notes: String,
}

impl PostRecord {
    /// Build a record from one raw sheet row. Short rows are padded with
    /// empty cells; the Sheets API omits trailing blanks.
    pub fn from_row(row_index: u32, cells: &[String]) -> Self {
        let cell = |index: usize| cells.get(index).map(String::as_str).unwrap_or("").trim();

        let platforms = cell(columns::PLATFORMS)
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(String::from)
            .collect();

        Self {
            row_index,
            id: cell(columns::ID).to_string(),
            media_name: cell(columns::MEDIA_NAME).to_string(),
            media_reference: cell(columns::MEDIA_REFERENCE).to_string(),
            title: cell(columns::TITLE).to_string(),
            description: cell(columns::DESCRIPTION).to_string(),
            tags: cell(columns::TAGS).to_string(),
            platforms,
            status: PostStatus::parse(cell(columns::STATUS)),
            scheduled_at: parse_scheduled_at(cell(columns::SCHEDULED_AT)),
            result_url: cell(columns::RESULT_URL).to_string(),
            notes: cell(columns::NOTES).to_string(),
        }
    }

    /// Whether this row should be processed at `now`.
    ///
    /// Due iff the row is `Scheduled` and its schedule time has arrived.
    /// A missing or unparseable schedule is never due; parsing ambiguity
    /// must not produce a false positive.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.status == Some(PostStatus::Scheduled)
            && self.scheduled_at.is_some_and(|at| at <= now)
    }
}

/// Parse the schedule cell into a UTC timestamp.
///
/// Accepts RFC 3339 and the naive ISO-like spellings spreadsheets tend to
/// produce; naive times are taken as UTC.
pub fn parse_scheduled_at(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }

    const NAIVE_FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    None
}
