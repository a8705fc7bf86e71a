//! Integration tests for the enrichment client against a mocked model API.

use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use socialpilot_enrich::{EnrichClient, EnrichError};

#[tokio::test]
async fn generate_parses_structured_output_and_folds_hashtags() {
    let server = MockServer::start().await;

    let inner = json!({
        "title": "Launch day!",
        "description": "We are live.",
        "hashtags": ["launch", "startup"]
    });
    Mock::given(method("POST"))
        .and(path("/models/gemini-3-flash-preview:generateContent"))
        .and(body_string_contains("viral social media strategist"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "parts": [{ "text": inner.to_string() }] }
            }]
        })))
        .mount(&server)
        .await;

    let client = EnrichClient::new("key").with_base_url(server.uri());
    let meta = client
        .generate("our product launch", &["facebook".to_string()])
        .await
        .unwrap();

    assert_eq!(meta.title, "Launch day!");
    assert_eq!(meta.description, "We are live.\n\n#launch #startup");
}

#[tokio::test]
async fn generate_surfaces_api_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exhausted"))
        .mount(&server)
        .await;

    let client = EnrichClient::new("key").with_base_url(server.uri());
    let err = client.generate("topic", &[]).await.unwrap_err();
    assert!(matches!(err, EnrichError::Api { status: 429, .. }));
}

#[tokio::test]
async fn generate_rejects_unparseable_candidate_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "not json" }] }
            }]
        })))
        .mount(&server)
        .await;

    let client = EnrichClient::new("key").with_base_url(server.uri());
    let err = client.generate("topic", &[]).await.unwrap_err();
    assert!(matches!(err, EnrichError::InvalidResponse(_)));
}
