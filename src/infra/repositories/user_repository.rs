//! User repository: the boundary between use cases and the relational store.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{NewUser, UpdateUser, User, UserId};
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Lookups that match nothing fail with [`AppError::NotFound`]; every other
/// storage fault surfaces as [`AppError::Database`].
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn get_by_id(&self, id: UserId) -> AppResult<User>;

    /// Find user by email address
    async fn get_by_email(&self, email: &str) -> AppResult<User>;

    /// Persist a new user; the stored record carries the assigned id and timestamps
    async fn create(&self, user: NewUser) -> AppResult<User>;

    /// Replace name and email of an existing user
    async fn update(&self, id: UserId, changes: UpdateUser) -> AppResult<User>;

    /// Permanently delete user
    async fn delete(&self, id: UserId) -> AppResult<()>;

    /// Page through users in id order
    async fn list(&self, offset: u64, limit: u64) -> AppResult<Vec<User>>;
}

/// SeaORM implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Identifiers beyond the storage key range cannot exist.
fn primary_key(id: UserId) -> AppResult<i32> {
    i32::try_from(id).map_err(|_| AppError::NotFound)
}

/// Translate a storage failure, logging it unless it only means "no such record".
/// Called inside the instrumented method span, so the event carries its fields.
fn storage_error(err: DbErr) -> AppError {
    let err = AppError::from(err);
    if err.is_infrastructure() {
        tracing::error!(error = %err, "user storage operation failed");
    }
    err
}

#[async_trait]
impl UserRepository for UserStore {
    #[tracing::instrument(name = "repo.get_by_id", skip(self))]
    async fn get_by_id(&self, id: UserId) -> AppResult<User> {
        UserEntity::find_by_id(primary_key(id)?)
            .one(&self.db)
            .await
            .map_err(storage_error)?
            .map(User::from)
            .ok_or_not_found()
    }

    #[tracing::instrument(name = "repo.get_by_email", skip(self))]
    async fn get_by_email(&self, email: &str) -> AppResult<User> {
        UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(storage_error)?
            .map(User::from)
            .ok_or_not_found()
    }

    #[tracing::instrument(name = "repo.create", skip(self, user), fields(email = %user.email))]
    async fn create(&self, user: NewUser) -> AppResult<User> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            name: Set(user.name),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(storage_error)?;
        Ok(User::from(model))
    }

    #[tracing::instrument(name = "repo.update", skip(self))]
    async fn update(&self, id: UserId, changes: UpdateUser) -> AppResult<User> {
        // Look up first so a missing id is reported instead of inserted
        let existing = UserEntity::find_by_id(primary_key(id)?)
            .one(&self.db)
            .await
            .map_err(storage_error)?
            .ok_or_not_found()?;

        let mut active: ActiveModel = existing.into();
        active.name = Set(changes.name);
        active.email = Set(changes.email);
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(storage_error)?;
        Ok(User::from(model))
    }

    #[tracing::instrument(name = "repo.delete", skip(self))]
    async fn delete(&self, id: UserId) -> AppResult<()> {
        let result = UserEntity::delete_by_id(primary_key(id)?)
            .exec(&self.db)
            .await
            .map_err(storage_error)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    #[tracing::instrument(name = "repo.list", skip(self))]
    async fn list(&self, offset: u64, limit: u64) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(storage_error)?;

        Ok(models.into_iter().map(User::from).collect())
    }
}
