//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::{Database, UserStore};
use crate::services::{UserManager, UserService};

/// Application state shared across handlers.
///
/// Holds only trait objects; handlers never see the storage client.
#[derive(Clone)]
pub struct AppState {
    /// User use cases
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    /// Create application state with a manually injected service.
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }

    /// Wire repository and use cases on top of an open database.
    pub fn from_database(database: &Database) -> Self {
        let user_repo = Arc::new(UserStore::new(database.get_connection()));
        let user_service = Arc::new(UserManager::new(user_repo));

        Self::new(user_service)
    }
}
