//! Asset store client integration tests
//!
//! Runs the client against a wiremock server standing in for the
//! external image host.

use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bookworm::assets::{AssetError, AssetStore};

#[tokio::test]
async fn test_upload_returns_secure_url() {
    let server = MockServer::start().await;
    let stored_url = format!("{}/uploads/abc123.jpg", server.uri());

    Mock::given(method("POST"))
        .and(path("/image/upload"))
        .and(body_partial_json(serde_json::json!({
            "file": "data:image/png;base64,xyz"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "secure_url": stored_url,
            "public_id": "abc123"
        })))
        .mount(&server)
        .await;

    let store = AssetStore::new(server.uri());
    let url = store.upload("data:image/png;base64,xyz").await.unwrap();
    assert_eq!(url, stored_url);
}

#[tokio::test]
async fn test_upload_without_url_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/image/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "public_id": "abc123"
        })))
        .mount(&server)
        .await;

    let store = AssetStore::new(server.uri());
    let result = store.upload("data:image/png;base64,xyz").await;
    assert!(matches!(result, Err(AssetError::MissingUrl)));
}

#[tokio::test]
async fn test_upload_failure_status_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/image/upload"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let store = AssetStore::new(server.uri());
    let result = store.upload("data:image/png;base64,xyz").await;
    assert!(matches!(result, Err(AssetError::Failed(500))));
}

#[tokio::test]
async fn test_delete_sends_public_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/image/destroy"))
        .and(body_partial_json(serde_json::json!({
            "public_id": "abc123"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": "ok"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = AssetStore::new(server.uri());
    store.delete("abc123").await.unwrap();
}

#[tokio::test]
async fn test_delete_failure_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/image/destroy"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let store = AssetStore::new(server.uri());
    let result = store.delete("abc123").await;
    assert!(matches!(result, Err(AssetError::Failed(502))));
}

#[tokio::test]
async fn test_uploaded_url_is_managed() {
    let server = MockServer::start().await;
    let stored_url = format!("{}/uploads/abc123.jpg", server.uri());

    Mock::given(method("POST"))
        .and(path("/image/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "secure_url": stored_url
        })))
        .mount(&server)
        .await;

    let store = AssetStore::new(server.uri());
    let url = store.upload("data:image/png;base64,xyz").await.unwrap();
    assert!(store.is_managed_url(&url));
    assert!(!store.is_managed_url("https://example.com/external.png"));
}
