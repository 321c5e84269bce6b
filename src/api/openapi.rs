//! OpenAPI documentation configuration.
//!
//! Served as JSON at `/api-docs/openapi.json`.

use utoipa::OpenApi;

use crate::api::handlers::{health_handler, user_handler};
use crate::domain::UserResponse;

/// OpenAPI documentation for the user API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User API",
        version = "0.1.0",
        description = "Layered user management API with Axum and SeaORM",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        health_handler::health_check,
        user_handler::list_users,
        user_handler::create_user,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
    ),
    components(
        schemas(
            UserResponse,
            user_handler::CreateUserRequest,
            user_handler::UpdateUserRequest,
            health_handler::HealthResponse,
        )
    ),
    tags(
        (name = "Users", description = "User management operations"),
        (name = "Health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;
