//! User service - Handles user-related use cases.
//!
//! Each operation delegates to exactly one repository call and hands the
//! outcome back unchanged. Failures are logged here with the operation's
//! context so handlers only have to pick a status code.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{CreateUser, NewUser, Password, UpdateUser, User, UserId};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, id: UserId) -> AppResult<User>;

    /// Get user by email address
    async fn get_user_by_email(&self, email: &str) -> AppResult<User>;

    /// Create a new user, hashing the supplied password
    async fn create_user(&self, input: CreateUser) -> AppResult<User>;

    /// Replace a user's name and email
    async fn update_user(&self, id: UserId, input: UpdateUser) -> AppResult<User>;

    /// Permanently delete user
    async fn delete_user(&self, id: UserId) -> AppResult<()>;

    /// List users by position
    async fn list_users(&self, offset: u64, limit: u64) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

fn log_failure(err: &AppError) {
    if err.is_infrastructure() {
        tracing::error!(error = %err, "use case failed");
    } else {
        tracing::warn!(error = %err, "use case failed");
    }
}

#[async_trait]
impl UserService for UserManager {
    #[tracing::instrument(name = "users.get", skip(self))]
    async fn get_user(&self, id: UserId) -> AppResult<User> {
        self.repo.get_by_id(id).await.inspect_err(log_failure)
    }

    #[tracing::instrument(name = "users.get_by_email", skip(self))]
    async fn get_user_by_email(&self, email: &str) -> AppResult<User> {
        self.repo.get_by_email(email).await.inspect_err(log_failure)
    }

    #[tracing::instrument(name = "users.create", skip(self, input), fields(email = %input.email))]
    async fn create_user(&self, input: CreateUser) -> AppResult<User> {
        let password = Password::new(&input.password).inspect_err(log_failure)?;

        let new_user = NewUser {
            name: input.name,
            email: input.email,
            password_hash: password.into_string(),
        };

        self.repo.create(new_user).await.inspect_err(log_failure)
    }

    #[tracing::instrument(name = "users.update", skip(self))]
    async fn update_user(&self, id: UserId, input: UpdateUser) -> AppResult<User> {
        self.repo.update(id, input).await.inspect_err(log_failure)
    }

    #[tracing::instrument(name = "users.delete", skip(self))]
    async fn delete_user(&self, id: UserId) -> AppResult<()> {
        self.repo.delete(id).await.inspect_err(log_failure)
    }

    #[tracing::instrument(name = "users.list", skip(self))]
    async fn list_users(&self, offset: u64, limit: u64) -> AppResult<Vec<User>> {
        self.repo.list(offset, limit).await.inspect_err(log_failure)
    }
}
