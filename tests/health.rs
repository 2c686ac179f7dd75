use axum::http::StatusCode;
use serde_json::json;

mod common;

#[tokio::test]
async fn test_health_and_ready() -> anyhow::Result<()> {
    let app = common::create_test_app().await?;

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));

    let (status, body) = app.get("/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ready"}));

    let (status, body) = app.get("/api/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Not found"}));

    Ok(())
}
