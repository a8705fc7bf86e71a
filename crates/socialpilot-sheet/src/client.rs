//! Google Sheets values API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::columns;
use crate::{PostRecord, PostStatus, SheetError};

const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com/v4";

/// Abstract row store the reconciler is generic over.
#[async_trait]
pub trait RowSource: Send + Sync {
    /// List all data rows. An empty sheet is `Ok(vec![])`, not an error.
    async fn list_rows(&self) -> Result<Vec<PostRecord>, SheetError>;

    /// Write the outcome of one processing attempt: status, notes and
    /// (on success) the result URL. Touches only the cells it owns.
    async fn update_row(
        &self,
        row_index: u32,
        status: PostStatus,
        notes: &str,
        result_url: Option<&str>,
    ) -> Result<(), SheetError>;
}

/// Sheets API `ValueRange` payload, both directions.
#[derive(Debug, Serialize, Deserialize)]
struct ValueRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    range: Option<String>,
    #[serde(default)]
    values: Option<Vec<Vec<String>>>,
}

/// Client for one spreadsheet tab.
#[derive(Clone)]
pub struct SheetClient {
    http: Client,
    base_url: String,
    spreadsheet_id: String,
    tab: String,
    token: String,
}

impl SheetClient {
    /// Create a client for the given spreadsheet, authenticated with a
    /// pre-issued bearer token.
    pub fn new(
        spreadsheet_id: impl Into<String>,
        tab: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            spreadsheet_id: spreadsheet_id.into(),
            tab: tab.into(),
            token: token.into(),
        }
    }

    /// Override the API base URL (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn values_url(&self, range: &str) -> String {
        format!(
            "{}/spreadsheets/{}/values/{}",
            self.base_url, self.spreadsheet_id, range
        )
    }

    /// Write a single cell with `valueInputOption=RAW`.
    async fn write_cell(&self, range: &str, value: &str) -> Result<(), SheetError> {
        let body = ValueRange {
            range: None,
            values: Some(vec![vec![value.to_string()]]),
        };

        let response = self
            .http
            .put(self.values_url(range))
            .query(&[("valueInputOption", "RAW")])
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(SheetError::Api { status, body });
        }

        debug!(range, "cell updated");
        Ok(())
    }
}

#[async_trait]
impl RowSource for SheetClient {
    async fn list_rows(&self) -> Result<Vec<PostRecord>, SheetError> {
        let range = columns::read_range(&self.tab);
        debug!(spreadsheet = %self.spreadsheet_id, range = %range, "reading sheet");

        let response = self
            .http
            .get(self.values_url(&range))
            .bearer_auth(&self.token)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(SheetError::Api { status, body });
        }

        let value_range: ValueRange = response.json().await?;
        let rows = value_range.values.unwrap_or_default();
        if rows.is_empty() {
            warn!(spreadsheet = %self.spreadsheet_id, "sheet has no data rows");
            return Ok(Vec::new());
        }

        info!(count = rows.len(), "retrieved sheet rows");

        Ok(rows
            .iter()
            .enumerate()
            .map(|(i, cells)| PostRecord::from_row(columns::DATA_START_ROW + i as u32, cells))
            .collect())
    }

    async fn update_row(
        &self,
        row_index: u32,
        status: PostStatus,
        notes: &str,
        result_url: Option<&str>,
    ) -> Result<(), SheetError> {
        info!(row = row_index, status = %status, "updating row outcome");

        self.write_cell(&columns::cell(&self.tab, columns::STATUS, row_index), status.as_str())
            .await?;
        // Notes are overwritten on every attempt, success or failure.
        self.write_cell(&columns::cell(&self.tab, columns::NOTES, row_index), notes)
            .await?;
        if let Some(url) = result_url {
            self.write_cell(&columns::cell(&self.tab, columns::RESULT_URL, row_index), url)
                .await?;
        }

        Ok(())
    }
}
