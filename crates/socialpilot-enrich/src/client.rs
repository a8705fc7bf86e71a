//! Gemini generateContent client with structured JSON output.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::EnrichError;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Generated metadata ready to paste into a post row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedMetadata {
    pub title: String,
    /// Description with the suggested hashtags appended.
    pub description: String,
}

/// Structured output requested from the model.
#[derive(Debug, Deserialize)]
struct GeneratedPost {
    title: String,
    description: String,
    hashtags: Vec<String>,
}

/// Client for a generative model that suggests titles and descriptions.
pub struct EnrichClient {
    http: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl EnrichClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(60))
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Override the API base URL (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Generate a title and platform-aware description for a topic.
    pub async fn generate(
        &self,
        topic: &str,
        platforms: &[String],
    ) -> Result<EnrichedMetadata, EnrichError> {
        let prompt = format!(
            "Act as a viral social media strategist. Generate a title and a \
             platform-specific description for a video about: \"{}\".\n\
             Target platforms: {}.\n\n\
             Ensure the description includes relevant hashtags and is \
             optimized for engagement.",
            topic,
            platforms.join(", ")
        );

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "hashtags": { "type": "ARRAY", "items": { "type": "STRING" } }
                    },
                    "required": ["title", "description", "hashtags"]
                }
            }
        });

        let response = self
            .http
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, self.model
            ))
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(EnrichError::Api { status, body });
        }

        let envelope: serde_json::Value = response.json().await?;
        let text = envelope["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| {
                EnrichError::InvalidResponse("missing candidate text".to_string())
            })?;

        let generated: GeneratedPost = serde_json::from_str(text)
            .map_err(|e| EnrichError::InvalidResponse(e.to_string()))?;

        debug!(title = %generated.title, "generated post metadata");
        Ok(EnrichedMetadata {
            title: generated.title,
            description: fold_hashtags(&generated.description, &generated.hashtags),
        })
    }
}

/// Append hashtags to the description as a `#tag` suffix block.
fn fold_hashtags(description: &str, hashtags: &[String]) -> String {
    if hashtags.is_empty() {
        return description.to_string();
    }
    let tags: Vec<String> = hashtags
        .iter()
        .map(|h| format!("#{}", h.trim_start_matches('#')))
        .collect();
    format!("{}\n\n{}", description, tags.join(" "))
}
