//! API integration tests
//!
//! Full-stack tests through the router, with wiremock standing in for
//! the asset store. These need a reachable PostgreSQL instance, so they
//! stay ignored unless `DATABASE_URL` is provided:
//!
//! ```text
//! DATABASE_URL=postgres://... cargo test -- --ignored
//! ```

mod common;

use axum::http::StatusCode;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{send_json, test_app, unique_username};

/// Mount upload + destroy stubs returning a URL under the mock's host
async fn mount_asset_store(server: &MockServer) -> String {
    let stored_url = format!("{}/uploads/abc123.jpg", server.uri());

    Mock::given(method("POST"))
        .and(path("/image/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "secure_url": stored_url,
            "public_id": "abc123"
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/image/destroy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": "ok"
        })))
        .mount(server)
        .await;

    stored_url
}

/// Register a fresh user and return (token, username)
async fn register_user(app: &axum::Router, prefix: &str) -> (String, String) {
    let username = unique_username(prefix);
    let (status, body) = send_json(
        app,
        "POST",
        "/auth/register",
        None,
        Some(serde_json::json!({
            "username": username,
            "email": format!("{}@example.com", username),
            "password": "secret1"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let token = body["token"].as_str().expect("token in response").to_string();
    (token, username)
}

#[tokio::test]
#[ignore = "requires DATABASE_URL with a running PostgreSQL"]
async fn test_register_and_login_flow() {
    let server = MockServer::start().await;
    let app = test_app(&server.uri()).await;

    let username = unique_username("alice");
    let email = format!("{}@example.com", username);

    let (status, body) = send_json(
        &app,
        "POST",
        "/auth/register",
        None,
        Some(serde_json::json!({
            "username": username,
            "email": email,
            "password": "secret1"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["token"].is_string());
    assert_eq!(body["user"]["username"], username.as_str());
    assert!(body["user"]["profileImage"]
        .as_str()
        .unwrap()
        .contains(&username));
    assert!(body["user"].get("passwordHash").is_none());
    assert!(body["user"].get("password_hash").is_none());

    // Wrong password and unknown email both come back as the same 401.
    let (status, body) = send_json(
        &app,
        "POST",
        "/auth/login",
        None,
        Some(serde_json::json!({ "email": email, "password": "wrong!!" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid credentials");

    let (status, body) = send_json(
        &app,
        "POST",
        "/auth/login",
        None,
        Some(serde_json::json!({
            "email": "nobody@example.com",
            "password": "secret1"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid credentials");

    let (status, body) = send_json(
        &app,
        "POST",
        "/auth/login",
        None,
        Some(serde_json::json!({ "email": email, "password": "secret1" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].is_string());
}

#[tokio::test]
#[ignore = "requires DATABASE_URL with a running PostgreSQL"]
async fn test_duplicate_registration_rejected() {
    let server = MockServer::start().await;
    let app = test_app(&server.uri()).await;

    let (_, username) = register_user(&app, "dup").await;

    // Same username, fresh email.
    let (status, body) = send_json(
        &app,
        "POST",
        "/auth/register",
        None,
        Some(serde_json::json!({
            "username": username,
            "email": "other@example.com",
            "password": "secret1"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Username or email already exists");

    // Fresh username, same email.
    let (status, body) = send_json(
        &app,
        "POST",
        "/auth/register",
        None,
        Some(serde_json::json!({
            "username": unique_username("dup2"),
            "email": format!("{}@example.com", username),
            "password": "secret1"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Username or email already exists");
}

#[tokio::test]
#[ignore = "requires DATABASE_URL with a running PostgreSQL"]
async fn test_registration_validation_messages() {
    let server = MockServer::start().await;
    let app = test_app(&server.uri()).await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/auth/register",
        None,
        Some(serde_json::json!({ "username": "alice" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "All fields are required");

    let (status, body) = send_json(
        &app,
        "POST",
        "/auth/register",
        None,
        Some(serde_json::json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "abc"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Password must be at least 6 characters long");

    let (status, body) = send_json(
        &app,
        "POST",
        "/auth/register",
        None,
        Some(serde_json::json!({
            "username": "al",
            "email": "al@example.com",
            "password": "secret1"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Username must be at least 3 characters long");
}

#[tokio::test]
#[ignore = "requires DATABASE_URL with a running PostgreSQL"]
async fn test_protected_routes_require_token() {
    let server = MockServer::start().await;
    let app = test_app(&server.uri()).await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/books",
        None,
        Some(serde_json::json!({
            "title": "Dune", "caption": "classic", "image": "x", "rating": 4
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "No token provided");

    let (status, body) = send_json(
        &app,
        "POST",
        "/books",
        Some("not.a.token"),
        Some(serde_json::json!({
            "title": "Dune", "caption": "classic", "image": "x", "rating": 4
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Token is not valid");

    let (status, _) = send_json(&app, "GET", "/books/user", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL with a running PostgreSQL"]
async fn test_book_lifecycle() {
    let server = MockServer::start().await;
    let stored_url = mount_asset_store(&server).await;
    let app = test_app(&server.uri()).await;

    let (owner_token, _) = register_user(&app, "owner").await;
    let (other_token, _) = register_user(&app, "other").await;

    // Out-of-range rating never reaches the asset store.
    let (status, body) = send_json(
        &app,
        "POST",
        "/books",
        Some(&owner_token),
        Some(serde_json::json!({
            "title": "Dune",
            "caption": "A classic",
            "image": "data:image/png;base64,xyz",
            "rating": 6
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Rating must be between 1 and 5");

    // Valid creation stores the asset store's URL, not the raw payload.
    let (status, book) = send_json(
        &app,
        "POST",
        "/books",
        Some(&owner_token),
        Some(serde_json::json!({
            "title": "Dune",
            "caption": "A classic",
            "image": "data:image/png;base64,xyz",
            "rating": 4
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(book["image"], stored_url.as_str());
    assert_eq!(book["rating"], 4);
    let book_id = book["id"].as_str().expect("book id").to_string();

    // Pagination arithmetic holds regardless of how many books exist.
    let (status, listing) = send_json(&app, "GET", "/books?page=1&limit=1", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let total_books = listing["totalBooks"].as_i64().unwrap();
    assert_eq!(listing["totalPages"].as_i64().unwrap(), total_books);
    assert_eq!(listing["currentPage"], 1);
    assert!(listing["books"].as_array().unwrap().len() <= 1);
    assert!(listing["books"][0]["user"]["username"].is_string());

    // The owner sees the book in their own listing.
    let (status, own) = send_json(&app, "GET", "/books/user", Some(&owner_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(own
        .as_array()
        .unwrap()
        .iter()
        .any(|b| b["id"] == book_id.as_str()));

    // A different authenticated user cannot delete it.
    let (status, body) = send_json(
        &app,
        "DELETE",
        &format!("/books/{}", book_id),
        Some(&other_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "You are not authorized to delete this book");

    // Still retrievable afterwards.
    let (status, fetched) =
        send_json(&app, "GET", &format!("/books/{}", book_id), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], book_id.as_str());

    // The owner can delete it; asset cleanup happens first.
    let (status, body) = send_json(
        &app,
        "DELETE",
        &format!("/books/{}", book_id),
        Some(&owner_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Book deleted successfully");

    let (status, _) = send_json(&app, "GET", &format!("/books/{}", book_id), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL with a running PostgreSQL"]
async fn test_failed_asset_deletion_keeps_record() {
    let server = MockServer::start().await;
    let stored_url = format!("{}/uploads/abc123.jpg", server.uri());

    Mock::given(method("POST"))
        .and(path("/image/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "secure_url": stored_url
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/image/destroy"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let app = test_app(&server.uri()).await;
    let (token, _) = register_user(&app, "keeper").await;

    let (status, book) = send_json(
        &app,
        "POST",
        "/books",
        Some(&token),
        Some(serde_json::json!({
            "title": "Dune",
            "caption": "A classic",
            "image": "data:image/png;base64,xyz",
            "rating": 5
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let book_id = book["id"].as_str().unwrap().to_string();

    // Asset deletion fails, so the whole operation aborts.
    let (status, _) = send_json(
        &app,
        "DELETE",
        &format!("/books/{}", book_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    // The record is untouched.
    let (status, _) = send_json(&app, "GET", &format!("/books/{}", book_id), None, None).await;
    assert_eq!(status, StatusCode::OK);
}
