use httpmock::prelude::*;
use inkboard::config::{AssetUrls, Config};
use inkboard::server::{router, AppState};
use std::sync::Arc;

fn test_config(api_base: &str, token: Option<&str>) -> Config {
    Config {
        listen: "127.0.0.1:0".to_string(),
        api_base: api_base.to_string(),
        base_id: "appTestBase".to_string(),
        table: "EmailLogs".to_string(),
        sort_field: "Update".to_string(),
        api_token: token.map(str::to_string),
        assets: AssetUrls::default(),
    }
}

async fn spawn_app(cfg: &Config) -> String {
    let state = Arc::new(AppState::new(cfg).unwrap());
    let app = router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn renders_dashboard_from_latest_record() {
    let airtable = MockServer::start_async().await;
    let mock = airtable
        .mock_async(|when, then| {
            when.method(GET)
                .path("/appTestBase/EmailLogs")
                .query_param("maxRecords", "1")
                .header("authorization", "Bearer test-token");
            then.status(200)
                .header("content-type", "application/json")
                .body(
                    r#"{
                        "records": [
                            { "id": "recA1", "createdTime": "2025-01-05T09:00:00.000Z",
                              "fields": {
                                  "Update": "Jan 5, 9:00 AM",
                                  "Inbox Count": 42,
                                  "7D Emails": 318,
                                  "7D Change": "-12%",
                                  "Wait Time": 3.5,
                                  "Wait Time Change": -1.5,
                                  "% FCR Rate": 87,
                                  "% FCR Rate Change": "2%",
                                  "Hours Per Week": 37.26,
                                  "Hours Per Day": 7.44,
                                  "7D RP Codes Sent": 14,
                                  "7D FS Codes Sent": 6,
                                  "7D RP Code Cost": "$210",
                                  "7D FS Code Cost": "$48",
                                  "Annual RP Code Cost": "$12,345",
                                  "Annual FS Code Cost": "$2,480"
                              } }
                        ]
                    }"#,
                );
        })
        .await;

    let base = spawn_app(&test_config(&airtable.base_url(), Some("test-token"))).await;
    let resp = reqwest::get(&base).await.unwrap();

    assert_eq!(resp.status(), 200);
    let content_type = resp
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let body = resp.text().await.unwrap();
    assert!(body.contains("Updated: Jan 5, 9:00 AM"));
    assert!(body.contains(">42<"));
    assert!(body.contains(">318<"));
    assert!(body.contains("↓ 12% from last week"));
    assert!(body.contains("↓ 1.5h from last week"));
    assert!(body.contains("↑ 2% from last week"));
    assert!(body.contains(">37.3<"));
    assert!(body.contains(">$12k<"));

    mock.assert_async().await;
}

#[tokio::test]
async fn empty_table_returns_404() {
    let airtable = MockServer::start_async().await;
    airtable
        .mock_async(|when, then| {
            when.method(GET).path("/appTestBase/EmailLogs");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{ "records": [] }"#);
        })
        .await;

    let base = spawn_app(&test_config(&airtable.base_url(), Some("test-token"))).await;
    let resp = reqwest::get(&base).await.unwrap();

    assert_eq!(resp.status(), 404);
    let body = resp.text().await.unwrap();
    assert!(body.contains("No records found in EmailLogs table"));
}

#[tokio::test]
async fn upstream_error_payload_returns_500() {
    let airtable = MockServer::start_async().await;
    airtable
        .mock_async(|when, then| {
            when.method(GET).path("/appTestBase/EmailLogs");
            then.status(401)
                .header("content-type", "application/json")
                .body(r#"{ "error": { "type": "AUTHENTICATION_REQUIRED", "message": "bad token" } }"#);
        })
        .await;

    let base = spawn_app(&test_config(&airtable.base_url(), Some("stale-token"))).await;
    let resp = reqwest::get(&base).await.unwrap();

    assert_eq!(resp.status(), 500);
    let body = resp.text().await.unwrap();
    assert!(body.starts_with("Airtable error:"));
    assert!(body.contains("AUTHENTICATION_REQUIRED"));
}

#[tokio::test]
async fn missing_token_returns_500_without_calling_upstream() {
    let airtable = MockServer::start_async().await;
    let mock = airtable
        .mock_async(|when, then| {
            when.method(GET).path("/appTestBase/EmailLogs");
            then.status(200).body(r#"{ "records": [] }"#);
        })
        .await;

    let base = spawn_app(&test_config(&airtable.base_url(), None)).await;
    let resp = reqwest::get(&base).await.unwrap();

    assert_eq!(resp.status(), 500);
    let body = resp.text().await.unwrap();
    assert_eq!(body, "Error: AIRTABLE_TOKEN environment variable not set");
    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn unreachable_upstream_returns_500() {
    // nothing listening on this port
    let base = spawn_app(&test_config("http://127.0.0.1:59999", Some("test-token"))).await;
    let resp = reqwest::get(&base).await.unwrap();

    assert_eq!(resp.status(), 500);
    let body = resp.text().await.unwrap();
    assert!(body.starts_with("Error: "));
}

#[tokio::test]
async fn healthz_reports_ok() {
    let base = spawn_app(&test_config("http://127.0.0.1:59999", None)).await;
    let resp = reqwest::get(format!("{base}/healthz")).await.unwrap();

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
