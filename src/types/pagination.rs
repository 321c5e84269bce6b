//! Pagination types for list endpoints.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::config::{DEFAULT_LIMIT, DEFAULT_OFFSET, MAX_LIMIT};

/// Raw `offset`/`limit` query values.
///
/// Kept as strings so malformed input falls back to defaults instead of
/// rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// Records to skip (default 0)
    #[param(value_type = Option<u64>, example = 0)]
    pub offset: Option<String>,
    /// Records to return (default 10, max 100)
    #[param(value_type = Option<u64>, example = 10)]
    pub limit: Option<String>,
}

/// Positional pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    pub offset: u64,
    pub limit: u64,
}

impl PaginationParams {
    pub fn new(offset: u64, limit: u64) -> Self {
        Self {
            offset,
            limit: limit.min(MAX_LIMIT),
        }
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self::new(DEFAULT_OFFSET, DEFAULT_LIMIT)
    }
}

impl From<PaginationQuery> for PaginationParams {
    fn from(query: PaginationQuery) -> Self {
        Self::new(
            parse_or(query.offset.as_deref(), DEFAULT_OFFSET),
            parse_or(query.limit.as_deref(), DEFAULT_LIMIT),
        )
    }
}

fn parse_or(raw: Option<&str>, fallback: u64) -> u64 {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(fallback)
}
