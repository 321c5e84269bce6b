//! Application route configuration.

use axum::{response::Json, routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use super::handlers::{health_routes, user_routes};
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::API_PREFIX;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Liveness probe, independent of storage
        .nest("/health", health_routes())
        // OpenAPI document
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest(&format!("{}/users", API_PREFIX), user_routes())
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
