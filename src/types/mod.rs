//! Shared types for list and write endpoints.

mod pagination;
mod response;

pub use pagination::{PaginationParams, PaginationQuery};
pub use response::{Created, NoContent};
