use axum::async_trait;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::saved_meals::repo as saved_meals_repo;
use crate::users::{repo as users_repo, repo_types::{User, UserProfile}};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),
    #[error("foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            let constraint = db_err.constraint().unwrap_or_default().to_string();
            if db_err.is_unique_violation() {
                return Self::UniqueViolation(constraint);
            }
            if db_err.is_foreign_key_violation() {
                return Self::ForeignKeyViolation(constraint);
            }
        }
        Self::Database(err)
    }
}

/// Persistence used by the route handlers. Every method is a single
/// point-in-time query; nothing is retried.
#[async_trait]
pub trait Store: Send + Sync {
    async fn create_user(&self, name: &str, email: &str, password_hash: &str)
        -> Result<Uuid, StoreError>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
    async fn find_profile(&self, id: Uuid) -> Result<Option<UserProfile>, StoreError>;
    /// Returns the number of rows touched.
    async fn update_user(
        &self,
        id: Uuid,
        name: &str,
        email: &str,
        profile: Option<&str>,
    ) -> Result<u64, StoreError>;

    async fn saved_meal_exists(&self, user_id: Uuid, meal_id: &str) -> Result<bool, StoreError>;
    async fn insert_saved_meal(&self, user_id: Uuid, meal_id: &str) -> Result<(), StoreError>;
    async fn list_saved_meals(&self, user_id: Uuid) -> Result<Vec<String>, StoreError>;
    /// Returns the number of rows removed.
    async fn delete_saved_meal(&self, user_id: Uuid, meal_id: &str) -> Result<u64, StoreError>;
}

#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn create_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<Uuid, StoreError> {
        users_repo::insert_user(&self.db, name, email, password_hash).await
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        users_repo::find_by_email(&self.db, email).await
    }

    async fn find_profile(&self, id: Uuid) -> Result<Option<UserProfile>, StoreError> {
        users_repo::find_profile(&self.db, id).await
    }

    async fn update_user(
        &self,
        id: Uuid,
        name: &str,
        email: &str,
        profile: Option<&str>,
    ) -> Result<u64, StoreError> {
        users_repo::update_user(&self.db, id, name, email, profile).await
    }

    async fn saved_meal_exists(&self, user_id: Uuid, meal_id: &str) -> Result<bool, StoreError> {
        saved_meals_repo::exists(&self.db, user_id, meal_id).await
    }

    async fn insert_saved_meal(&self, user_id: Uuid, meal_id: &str) -> Result<(), StoreError> {
        saved_meals_repo::insert(&self.db, user_id, meal_id).await
    }

    async fn list_saved_meals(&self, user_id: Uuid) -> Result<Vec<String>, StoreError> {
        saved_meals_repo::list_meal_ids(&self.db, user_id).await
    }

    async fn delete_saved_meal(&self, user_id: Uuid, meal_id: &str) -> Result<u64, StoreError> {
        saved_meals_repo::delete(&self.db, user_id, meal_id).await
    }
}
