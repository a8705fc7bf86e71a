//! Drive file download client.

use std::pin::Pin;
use std::sync::OnceLock;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::{Stream, TryStreamExt};
use regex::Regex;
use reqwest::Client;
use tracing::debug;

use crate::MediaError;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/drive/v3";

/// Download timeout. Generous because whole videos flow through it.
const FETCH_TIMEOUT: Duration = Duration::from_secs(600);

/// A streamed media body. Chunks arrive as the transfer progresses; the
/// whole file is never held in memory.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, std::io::Error>> + Send>>;

/// Abstract media resolver the reconciler is generic over.
#[async_trait]
pub trait MediaSource: Send + Sync {
    /// Resolve a media reference to a readable byte stream.
    async fn fetch(&self, reference: &str) -> Result<ByteStream, MediaError>;
}

/// Extract the stable file id embedded in a drive share link: the first
/// alphanumeric/hyphen token of at least 25 characters.
pub fn extract_file_id(reference: &str) -> Option<&str> {
    static FILE_ID: OnceLock<Regex> = OnceLock::new();
    let re = FILE_ID.get_or_init(|| Regex::new(r"[-\w]{25,}").expect("valid file id regex"));
    re.find(reference).map(|m| m.as_str())
}

/// Client for downloading files from the drive API.
#[derive(Clone)]
pub struct DriveClient {
    http: Client,
    base_url: String,
    token: String,
}

impl DriveClient {
    /// Create a client authenticated with a pre-issued bearer token.
    pub fn new(token: impl Into<String>) -> Self {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(FETCH_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            token: token.into(),
        }
    }

    /// Override the API base URL (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl MediaSource for DriveClient {
    async fn fetch(&self, reference: &str) -> Result<ByteStream, MediaError> {
        let file_id = extract_file_id(reference)
            .ok_or_else(|| MediaError::InvalidReference(reference.to_string()))?;

        debug!(file_id, "initiating media stream");

        let response = self
            .http
            .get(format!("{}/files/{}", self.base_url, file_id))
            .query(&[("alt", "media")])
            .bearer_auth(&self.token)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(MediaError::Api { status, body });
        }

        let stream = response
            .bytes_stream()
            .map_err(|e| std::io::Error::other(e.to_string()));
        Ok(Box::pin(stream))
    }
}
