//! Integration tests for the sheet client against a mocked Sheets API.

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use socialpilot_sheet::{PostStatus, RowSource, SheetClient, SheetError};

fn client(server: &MockServer) -> SheetClient {
    SheetClient::new("sheet-123", "Sheet1", "test-token").with_base_url(server.uri())
}

#[tokio::test]
async fn list_rows_maps_data_rows() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spreadsheets/sheet-123/values/Sheet1!A2:M"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "range": "Sheet1!A2:M",
            "values": [
                ["post-1", "a.mp4", "https://drive.google.com/d/x", "First",
                 "desc", "tags", "facebook", "Scheduled", "2026-01-01T00:00:00Z"],
                ["post-2", "b.mp4", "", "Second", "", "", "", "Draft"]
            ]
        })))
        .mount(&server)
        .await;

    let rows = client(&server).list_rows().await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].row_index, 2);
    assert_eq!(rows[0].status, Some(PostStatus::Scheduled));
    assert_eq!(rows[1].row_index, 3);
    assert_eq!(rows[1].status, Some(PostStatus::Draft));
    assert!(rows[1].scheduled_at.is_none());
}

#[tokio::test]
async fn list_rows_empty_sheet_is_ok() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "range": "Sheet1!A2:M"
        })))
        .mount(&server)
        .await;

    let rows = client(&server).list_rows().await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn list_rows_surfaces_api_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_string("permission denied"))
        .mount(&server)
        .await;

    let err = client(&server).list_rows().await.unwrap_err();
    match err {
        SheetError::Api { status, body } => {
            assert_eq!(status, 403);
            assert!(body.contains("permission denied"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn update_row_writes_status_notes_and_url_cells() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/spreadsheets/sheet-123/values/Sheet1!H7"))
        .and(query_param("valueInputOption", "RAW"))
        .and(body_partial_json(json!({ "values": [["Posted"]] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/spreadsheets/sheet-123/values/Sheet1!M7"))
        .and(body_partial_json(json!({ "values": [["Auto-posted successfully"]] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/spreadsheets/sheet-123/values/Sheet1!J7"))
        .and(body_partial_json(json!({ "values": [["https://example.com/p/1"]] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .update_row(
            7,
            PostStatus::Posted,
            "Auto-posted successfully",
            Some("https://example.com/p/1"),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn update_row_without_url_skips_the_url_cell() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/spreadsheets/sheet-123/values/Sheet1!H4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/spreadsheets/sheet-123/values/Sheet1!M4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/spreadsheets/sheet-123/values/Sheet1!J4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    client(&server)
        .update_row(4, PostStatus::Failed, "network error", None)
        .await
        .unwrap();
}
