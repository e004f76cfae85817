mod common;

use anyhow::Result;
use clip_relay::core::gdocs::google_doc_id;
use clip_relay::{DispatchOutcome, PageTarget, RelayError};
use common::relay_with_settings;
use httpmock::prelude::*;
use tempfile::TempDir;

#[tokio::test]
async fn test_google_doc_export_is_delivered() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();

    let export_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/document/d/ABC123/export")
            .query_param("format", "txt");
        then.status(200).body("\u{feff}Meeting notes\n\n  - item one\n");
    });
    let hook_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/hook")
            .header("authorization", "Bearer doc-token")
            .json_body_partial(
                serde_json::json!({
                    "url": "https://docs.google.com/document/d/ABC123/edit",
                    "title": "Team sync",
                    "content": "Meeting notes\n\n  - item one",
                    "selection": "",
                    "message": ""
                })
                .to_string(),
            );
        then.status(200);
    });

    let relay =
        relay_with_settings(&temp_dir, &server.url("/hook"), "doc-token", &server.base_url())
            .await?;
    let target =
        PageTarget::new("https://docs.google.com/document/d/ABC123/edit").with_title("Team sync");

    let outcome = relay.send_payload(&target, "selection is ignored for docs").await?;

    export_mock.assert();
    hook_mock.assert();
    assert_eq!(outcome, DispatchOutcome::Delivered { status: 200 });
    Ok(())
}

#[tokio::test]
async fn test_failed_export_aborts_without_delivery() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();

    let export_mock = server.mock(|when, then| {
        when.method(GET).path("/document/d/ABC123/export");
        then.status(404);
    });
    let hook_mock = server.mock(|when, then| {
        when.method(POST).path("/hook");
        then.status(200);
    });

    let relay = relay_with_settings(&temp_dir, &server.url("/hook"), "", &server.base_url()).await?;
    let target = PageTarget::new("https://docs.google.com/document/d/ABC123/edit");

    let err = relay.send_payload(&target, "").await.unwrap_err();

    export_mock.assert();
    assert_eq!(hook_mock.hits(), 0);
    match err {
        RelayError::DocumentFetch { doc_id, reason } => {
            assert_eq!(doc_id, "ABC123");
            assert_eq!(reason, "HTTP 404");
        }
        other => panic!("unexpected error: {}", other),
    }
    Ok(())
}

#[test]
fn test_non_doc_url_takes_page_path() {
    assert_eq!(
        google_doc_id("https://docs.google.com/document/d/ABC123/edit"),
        Some("ABC123".to_string())
    );
    assert_eq!(google_doc_id("https://example.com/article/42"), None);
}
