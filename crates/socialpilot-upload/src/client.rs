//! Distribution API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client};
use serde::Deserialize;
use tracing::{debug, info};

use socialpilot_drive::ByteStream;

use crate::UploadError;

const DEFAULT_BASE_URL: &str = "https://api.upload-post.com/api";

/// Upload timeout. The whole video body flows through one request.
const UPLOAD_TIMEOUT: Duration = Duration::from_secs(900);

/// Post metadata sent alongside the video.
#[derive(Debug, Clone)]
pub struct PostMetadata {
    pub title: String,
    pub description: String,
    pub platforms: Vec<String>,
}

/// Outcome of a successful publish.
#[derive(Debug, Clone, Deserialize)]
pub struct PublishReceipt {
    /// Post identifier assigned by the API.
    pub id: String,
    /// Display URL, when the API provides one.
    #[serde(default)]
    pub url: Option<String>,
}

/// Fallback display URL for receipts that carry only an id.
pub fn view_url(id: &str) -> String {
    format!("https://upload-post.com/view/{id}")
}

/// Abstract publisher the reconciler is generic over.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publish one video to the target platforms. One multipart request,
    /// no retries.
    async fn publish(
        &self,
        video: ByteStream,
        meta: &PostMetadata,
    ) -> Result<PublishReceipt, UploadError>;
}

/// Client for the upload-post distribution API.
#[derive(Clone)]
pub struct UploadClient {
    http: Client,
    base_url: String,
    api_key: String,
    user: String,
}

impl UploadClient {
    /// Create a client for the given account.
    pub fn new(api_key: impl Into<String>, user: impl Into<String>) -> Self {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(UPLOAD_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            user: user.into(),
        }
    }

    /// Override the API base URL (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch the account's posting history.
    pub async fn history(&self) -> Result<serde_json::Value, UploadError> {
        let response = self
            .http
            .get(format!("{}/uploadposts/history", self.base_url))
            .header("Authorization", format!("Apikey {}", self.api_key))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(UploadError::api(status, &body));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl Publisher for UploadClient {
    async fn publish(
        &self,
        video: ByteStream,
        meta: &PostMetadata,
    ) -> Result<PublishReceipt, UploadError> {
        info!(title = %meta.title, platforms = ?meta.platforms, "uploading post");

        let mut form = Form::new()
            .text("user", self.user.clone())
            .part(
                "video",
                Part::stream(Body::wrap_stream(video)).file_name("content.mp4"),
            )
            .text("title", meta.title.clone());

        // The API expects one repeated entry per platform, not a joined
        // string. Platforms are normalized here, at upload time.
        for platform in &meta.platforms {
            form = form.text("platform[]", platform.trim().to_lowercase());
        }

        if !meta.description.is_empty() {
            form = form.text("description", meta.description.clone());
        }

        let response = self
            .http
            .post(format!("{}/upload", self.base_url))
            .header("Authorization", format!("Apikey {}", self.api_key))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(UploadError::api(status, &body));
        }

        let body = response.text().await?;
        let receipt: PublishReceipt = serde_json::from_str(&body)
            .map_err(|e| UploadError::InvalidResponse(format!("{e}: {}", crate::truncate_body(&body))))?;

        debug!(id = %receipt.id, "upload accepted");
        Ok(receipt)
    }
}
