use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::{User, UserProfile};
use crate::store::StoreError;

/// Insert a new user; the id is generated by the database.
pub async fn insert_user(
    db: &PgPool,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<Uuid, StoreError> {
    let id = sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO users (name, email, password_hash)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .fetch_one(db)
    .await?;
    Ok(id)
}

/// Find a user by email.
pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>, StoreError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, profile
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(db)
    .await?;
    Ok(user)
}

pub async fn find_profile(db: &PgPool, id: Uuid) -> Result<Option<UserProfile>, StoreError> {
    let profile = sqlx::query_as::<_, UserProfile>(
        r#"
        SELECT id, name, email, profile
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(profile)
}

pub async fn update_user(
    db: &PgPool,
    id: Uuid,
    name: &str,
    email: &str,
    profile: Option<&str>,
) -> Result<u64, StoreError> {
    let result = sqlx::query(
        r#"
        UPDATE users
           SET name = $1, email = $2, profile = $3
         WHERE id = $4
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(profile) // None → NULL
    .bind(id)
    .execute(db)
    .await?;
    Ok(result.rows_affected())
}
