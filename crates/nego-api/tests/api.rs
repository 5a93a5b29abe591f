//! End-to-end tests driving the router over in-process requests.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use nego_api::auth::hash_password;
use nego_api::{create_router, ApiConfig, AppState};
use nego_models::User;
use nego_store::{MemoryStore, Store};

fn test_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(ApiConfig::default(), store.clone());
    (create_router(state), store)
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Insert a user with a known password and balance, then log in for a token.
async fn funded_user_token(app: &Router, store: &MemoryStore, coins: i64) -> String {
    let mut user = User::new("buyer@example.com", "Buyer", hash_password("secret123").unwrap());
    user.coins = coins;
    store.insert_user(user).await.unwrap();

    let (status, body) = send(
        app,
        Method::POST,
        "/api/auth/login",
        Some(json!({"email": "buyer@example.com", "password": "secret123"})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["access_token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_reports_status_and_timestamp() {
    let (app, _) = test_app();
    let (status, body) = send(&app, Method::GET, "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn seed_then_list_returns_fixture_talents() {
    let (app, _) = test_app();

    let (status, body) = send(&app, Method::POST, "/api/seed", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Database seeded successfully");
    assert_eq!(body["talents_created"], 8);
    assert_eq!(body["content_created"], 3);

    let (status, body) = send(&app, Method::GET, "/api/talents", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 8);

    let (status, body) = send(&app, Method::GET, "/api/talents/talent-1", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Adaeze Nwosu");
    assert_eq!(body["location"], "Lagos");

    let (status, _) = send(&app, Method::GET, "/api/talents/does-not-exist", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn second_seed_is_a_no_op() {
    let (app, _) = test_app();
    send(&app, Method::POST, "/api/seed", None, None).await;

    let (status, body) = send(&app, Method::POST, "/api/seed", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Database already seeded");
    assert_eq!(body["talents"], 8);

    let (_, body) = send(&app, Method::GET, "/api/talents", None, None).await;
    assert_eq!(body["total"], 8);
}

#[tokio::test]
async fn talent_listing_supports_filters_and_paging() {
    let (app, _) = test_app();
    send(&app, Method::POST, "/api/seed", None, None).await;

    let (_, body) = send(&app, Method::GET, "/api/talents?location=lagos", None, None).await;
    assert_eq!(body["total"], 3);

    let (_, body) = send(&app, Method::GET, "/api/talents?verified=true", None, None).await;
    assert_eq!(body["total"], 8);

    let (_, body) = send(&app, Method::GET, "/api/talents?skip=6&limit=2", None, None).await;
    assert_eq!(body["total"], 8);
    assert_eq!(body["talents"].as_array().unwrap().len(), 2);
    assert_eq!(body["talents"][0]["id"], "talent-7");
}

#[tokio::test]
async fn talent_crud_round_trip() {
    let (app, _) = test_app();

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/talents",
        Some(json!({
            "name": "New Talent",
            "location": "Accra",
            "image": "https://example.com/t.jpg",
            "starting_price": 90000,
            "age": 26,
            "verified": false,
        })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();

    let (status, patched) = send(
        &app,
        Method::PATCH,
        &format!("/api/talents/{id}"),
        Some(json!({"rating": 4.2})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["rating"], 4.2);
    assert_eq!(patched["name"], "New Talent");
    assert_eq!(patched["location"], "Accra");
    assert_eq!(patched["created_at"], created["created_at"]);
    assert_ne!(patched["updated_at"], created["updated_at"]);

    let (status, _) = send(&app, Method::DELETE, &format!("/api/talents/{id}"), None, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::GET, &format!("/api/talents/{id}"), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn talent_validation_names_the_offending_field() {
    let (app, _) = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/talents",
        Some(json!({
            "name": "Too Young",
            "location": "Lagos",
            "image": "https://example.com/t.jpg",
            "starting_price": 90000,
            "age": 17,
        })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("age"));
}

#[tokio::test]
async fn register_login_me_flow() {
    let (app, _) = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/register",
        Some(json!({"email": "ada@example.com", "name": "Ada", "password": "secret123"})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["user"]["coins"], 0);
    let token = body["access_token"].as_str().unwrap().to_string();

    let (status, me) = send(&app, Method::GET, "/api/auth/me", None, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["email"], "ada@example.com");
    assert!(me.get("hashed_password").is_none());

    // Duplicate registration is rejected
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/register",
        Some(json!({"email": "ada@example.com", "name": "Other", "password": "secret456"})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Email already registered");
}

#[tokio::test]
async fn login_failures_are_structurally_identical() {
    let (app, _) = test_app();
    send(
        &app,
        Method::POST,
        "/api/auth/register",
        Some(json!({"email": "ada@example.com", "name": "Ada", "password": "secret123"})),
        None,
    )
    .await;

    let (wrong_status, wrong_body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        Some(json!({"email": "ada@example.com", "password": "wrong-password"})),
        None,
    )
    .await;
    let (unknown_status, unknown_body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        Some(json!({"email": "nobody@example.com", "password": "secret123"})),
        None,
    )
    .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_body, unknown_body);
}

#[tokio::test]
async fn protected_routes_reject_missing_and_invalid_tokens() {
    let (app, _) = test_app();

    let (status, _) = send(&app, Method::GET, "/api/auth/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(&app, Method::GET, "/api/auth/me", None, Some("garbage")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["detail"], "Invalid token");

    let (status, _) = send(&app, Method::GET, "/api/content/unlocked", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn public_content_listing_hides_locked_descriptions() {
    let (app, _) = test_app();
    send(&app, Method::POST, "/api/seed", None, None).await;

    let (status, body) = send(&app, Method::GET, "/api/content", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 3);
    for item in items {
        assert_eq!(item["is_locked"], true);
        assert_eq!(item["description"], Value::Null);
        assert!(item["image_url"].as_str().unwrap().starts_with("https://"));
    }
}

#[tokio::test]
async fn unlock_debits_once_and_repeat_is_free() {
    let (app, store) = test_app();
    send(&app, Method::POST, "/api/seed", None, None).await;
    let token = funded_user_token(&app, &store, 100).await;

    // content-1 costs 50
    let (status, view) = send(
        &app,
        Method::POST,
        "/api/content/content-1/unlock",
        None,
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["is_locked"], false);
    assert!(view["description"].is_string());

    let (_, me) = send(&app, Method::GET, "/api/auth/me", None, Some(&token)).await;
    assert_eq!(me["coins"], 50);

    // Second unlock returns the same view without another debit
    let (status, view) = send(
        &app,
        Method::POST,
        "/api/content/content-1/unlock",
        None,
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["is_locked"], false);

    let (_, me) = send(&app, Method::GET, "/api/auth/me", None, Some(&token)).await;
    assert_eq!(me["coins"], 50);
}

#[tokio::test]
async fn unlock_with_insufficient_coins_reports_both_numbers() {
    let (app, store) = test_app();
    send(&app, Method::POST, "/api/seed", None, None).await;
    let token = funded_user_token(&app, &store, 50).await;

    // content-3 costs 100
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/content/content-3/unlock",
        None,
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Insufficient coins. Need 100, have 50");

    let (_, me) = send(&app, Method::GET, "/api/auth/me", None, Some(&token)).await;
    assert_eq!(me["coins"], 50);
}

#[tokio::test]
async fn unlock_of_unknown_content_is_404() {
    let (app, store) = test_app();
    let token = funded_user_token(&app, &store, 100).await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/content/does-not-exist/unlock",
        None,
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unlocked_listing_reveals_descriptions_after_grant() {
    let (app, store) = test_app();
    send(&app, Method::POST, "/api/seed", None, None).await;
    let token = funded_user_token(&app, &store, 100).await;

    let (_, body) = send(&app, Method::GET, "/api/content/unlocked", None, Some(&token)).await;
    assert_eq!(body.as_array().unwrap().len(), 0);

    send(
        &app,
        Method::POST,
        "/api/content/content-1/unlock",
        None,
        Some(&token),
    )
    .await;

    let (status, body) = send(&app, Method::GET, "/api/content/unlocked", None, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], "content-1");
    assert_eq!(items[0]["is_locked"], false);
    assert!(items[0]["description"].is_string());
}

#[tokio::test]
async fn content_creation_returns_locked_view() {
    let (app, _) = test_app();

    let (status, view) = send(
        &app,
        Method::POST,
        "/api/content",
        Some(json!({
            "title": "New Gallery",
            "description": "A fresh drop",
            "image_url": "https://example.com/new.jpg",
            "unlock_price": 25,
        })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(view["is_locked"], true);
    assert_eq!(view["description"], Value::Null);
    assert_eq!(view["unlock_price"], 25);
}
