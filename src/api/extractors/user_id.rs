//! Path extractor for user identifiers.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::domain::UserId;
use crate::errors::AppError;

/// `{id}` path segment parsed as a positive integer.
///
/// Anything else rejects with 400 before a handler body runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserIdPath(pub UserId);

#[async_trait]
impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid_id())?;

        parse_user_id(&raw).map(UserIdPath)
    }
}

fn invalid_id() -> AppError {
    AppError::bad_request("Invalid user ID")
}

/// Parse a decimal, non-zero identifier.
pub fn parse_user_id(raw: &str) -> Result<UserId, AppError> {
    match raw.parse::<UserId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(invalid_id()),
    }
}
