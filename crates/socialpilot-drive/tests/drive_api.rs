//! Integration tests for the drive client against a mocked API.

use futures_util::TryStreamExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use socialpilot_drive::{DriveClient, MediaError, MediaSource};

const FILE_ID: &str = "1aBcDeFgHiJkLmNoPqRsTuVwXyZ12345";

#[tokio::test]
async fn fetch_streams_file_bytes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/files/{FILE_ID}")))
        .and(query_param("alt", "media"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"video-bytes".to_vec()))
        .mount(&server)
        .await;

    let client = DriveClient::new("token").with_base_url(server.uri());
    let reference = format!("https://drive.google.com/file/d/{FILE_ID}/view");
    let stream = client.fetch(&reference).await.unwrap();

    let chunks: Vec<_> = stream.try_collect().await.unwrap();
    let body: Vec<u8> = chunks.concat();
    assert_eq!(body, b"video-bytes");
}

#[tokio::test]
async fn fetch_rejects_references_without_file_id() {
    let server = MockServer::start().await;
    let client = DriveClient::new("token").with_base_url(server.uri());

    let err = client
        .fetch("https://example.com/not-a-drive-link")
        .await
        .err()
        .expect("expected an error");
    assert!(matches!(err, MediaError::InvalidReference(_)));
}

#[tokio::test]
async fn fetch_surfaces_access_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("File not found"))
        .mount(&server)
        .await;

    let client = DriveClient::new("token").with_base_url(server.uri());
    let err = client.fetch(FILE_ID).await.err().expect("expected an error");
    match err {
        MediaError::Api { status, body } => {
            assert_eq!(status, 404);
            assert!(body.contains("File not found"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}
