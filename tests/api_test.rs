//! HTTP tests driving the full router with `oneshot`.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::Router;
use sea_orm::DbErr;
use serde_json::{json, Value};
use tower::ServiceExt;

use user_api::api::create_router;
use user_api::domain::{CreateUser, UpdateUser, User, UserId};
use user_api::errors::{AppError, AppResult};
use user_api::services::UserService;
use user_api::AppState;

use common::{body_bytes, empty_request, json_body, json_request, test_database};

/// Use case double that counts calls and fails every one with a storage error.
#[derive(Default)]
struct FailingService {
    calls: AtomicUsize,
}

impl FailingService {
    fn fail<T>(&self) -> AppResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(AppError::Database(DbErr::Custom(
            "connection refused to db.internal:3306".to_string(),
        )))
    }
}

#[async_trait]
impl UserService for FailingService {
    async fn get_user(&self, _id: UserId) -> AppResult<User> {
        self.fail()
    }

    async fn get_user_by_email(&self, _email: &str) -> AppResult<User> {
        self.fail()
    }

    async fn create_user(&self, _input: CreateUser) -> AppResult<User> {
        self.fail()
    }

    async fn update_user(&self, _id: UserId, _input: UpdateUser) -> AppResult<User> {
        self.fail()
    }

    async fn delete_user(&self, _id: UserId) -> AppResult<()> {
        self.fail()
    }

    async fn list_users(&self, _offset: u64, _limit: u64) -> AppResult<Vec<User>> {
        self.fail()
    }
}

async fn app() -> Router {
    let db = test_database().await;
    create_router(AppState::from_database(&db))
}

fn failing_app() -> (Router, Arc<FailingService>) {
    let service = Arc::new(FailingService::default());
    let router = create_router(AppState::new(service.clone()));
    (router, service)
}

async fn create(app: &Router, name: &str, email: &str) -> Value {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/users",
            json!({ "name": name, "email": email, "password": "secret123" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response).await
}

// ============ Health ============

#[tokio::test]
async fn test_health_check() {
    let app = app().await;

    let response = app.oneshot(empty_request("GET", "/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_health_check_ignores_storage() {
    let (app, service) = failing_app();

    let response = app.oneshot(empty_request("GET", "/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "status": "ok" }));
    assert_eq!(service.calls.load(Ordering::SeqCst), 0);
}

// ============ Create ============

#[tokio::test]
async fn test_create_user_returns_created() {
    let app = app().await;

    let body = create(&app, "Ada", "ada@example.com").await;

    assert!(body["id"].as_u64().unwrap() > 0);
    assert_eq!(body["name"], "Ada");
    assert_eq!(body["email"], "ada@example.com");
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_create_user_invalid_email() {
    let app = app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/users",
            json!({ "name": "Ada", "email": "not-an-email", "password": "secret123" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["message"], "Invalid email format");
}

#[tokio::test]
async fn test_create_user_short_password() {
    let app = app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/users",
            json!({ "name": "Ada", "email": "ada@example.com", "password": "12345" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(
        body["error"]["message"],
        "Password must be at least 6 characters"
    );
}

#[tokio::test]
async fn test_create_user_malformed_body_skips_use_case() {
    let (app, service) = failing_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/users",
            json!({ "name": "Ada" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(service.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_create_user_duplicate_email_is_internal_error() {
    let app = app().await;
    create(&app, "Ada", "ada@example.com").await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/users",
            json!({ "name": "Other", "email": "ada@example.com", "password": "secret123" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["error"]["code"], "DATABASE_ERROR");
}

// ============ Get ============

#[tokio::test]
async fn test_get_user_round_trip() {
    let app = app().await;
    let created = create(&app, "Ada", "ada@example.com").await;
    let id = created["id"].as_u64().unwrap();

    let response = app
        .oneshot(empty_request("GET", &format!("/api/v1/users/{id}")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, created);
}

#[tokio::test]
async fn test_get_user_invalid_id_skips_use_case() {
    let (app, service) = failing_app();

    for path in ["/api/v1/users/abc", "/api/v1/users/0", "/api/v1/users/-3"] {
        let response = app.clone().oneshot(empty_request("GET", path)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{path}");
        let body = json_body(response).await;
        assert_eq!(body["error"]["message"], "Invalid user ID");
    }

    assert_eq!(service.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_get_user_not_found() {
    let app = app().await;

    let response = app
        .oneshot(empty_request("GET", "/api/v1/users/42"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "User not found");
}

#[tokio::test]
async fn test_storage_failure_hides_details() {
    let (app, service) = failing_app();

    let response = app
        .oneshot(empty_request("GET", "/api/v1/users/1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let raw = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(raw.contains("An internal error occurred"));
    assert!(!raw.contains("db.internal"));
    assert_eq!(service.calls.load(Ordering::SeqCst), 1);
}

// ============ Update ============

#[tokio::test]
async fn test_update_user() {
    let app = app().await;
    let created = create(&app, "Ada", "ada@example.com").await;
    let id = created["id"].as_u64().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/v1/users/{id}"),
            json!({ "name": "Ada L.", "email": "lovelace@example.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["id"].as_u64(), Some(id));
    assert_eq!(body["name"], "Ada L.");
    assert_eq!(body["email"], "lovelace@example.com");

    let response = app
        .oneshot(empty_request("GET", &format!("/api/v1/users/{id}")))
        .await
        .unwrap();
    assert_eq!(json_body(response).await, body);
}

#[tokio::test]
async fn test_update_missing_user_is_not_found() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/v1/users/99",
            json!({ "name": "Ghost", "email": "ghost@example.com" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(empty_request("GET", "/api/v1/users"))
        .await
        .unwrap();
    assert_eq!(json_body(response).await, json!([]));
}

// ============ Delete ============

#[tokio::test]
async fn test_delete_user() {
    let app = app().await;
    let created = create(&app, "Ada", "ada@example.com").await;
    let uri = format!("/api/v1/users/{}", created["id"]);

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let response = app
        .clone()
        .oneshot(empty_request("GET", &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(empty_request("DELETE", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ============ List ============

#[tokio::test]
async fn test_list_users_pagination() {
    let app = app().await;
    for n in 1..=15 {
        create(&app, &format!("User {n}"), &format!("user{n}@example.com")).await;
    }

    let cases = [
        ("/api/v1/users", 10),
        ("/api/v1/users?offset=10&limit=10", 5),
        ("/api/v1/users?limit=3", 3),
        ("/api/v1/users?offset=20", 0),
        // Malformed values fall back to 0 / 10
        ("/api/v1/users?offset=abc&limit=xyz", 10),
        ("/api/v1/users?limit=-1", 10),
    ];

    for (uri, expected) in cases {
        let response = app.clone().oneshot(empty_request("GET", uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        let body = json_body(response).await;
        assert_eq!(body.as_array().unwrap().len(), expected, "{uri}");
    }
}

#[tokio::test]
async fn test_list_users_order_is_stable() {
    let app = app().await;
    for n in 1..=4 {
        create(&app, &format!("User {n}"), &format!("user{n}@example.com")).await;
    }

    let response = app
        .oneshot(empty_request("GET", "/api/v1/users"))
        .await
        .unwrap();
    let body = json_body(response).await;
    let ids: Vec<u64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_u64().unwrap())
        .collect();

    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
    assert!(body.as_array().unwrap().iter().all(|u| u.get("password_hash").is_none()));
}

// ============ OpenAPI ============

#[tokio::test]
async fn test_openapi_document() {
    let (app, _) = failing_app();

    let response = app
        .oneshot(empty_request("GET", "/api-docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert!(body["paths"].get("/api/v1/users").is_some());
    assert!(body["paths"].get("/api/v1/users/{id}").is_some());
    assert!(body["paths"].get("/health").is_some());
}
