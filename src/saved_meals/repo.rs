use sqlx::PgPool;
use uuid::Uuid;

use crate::store::StoreError;

pub async fn exists(db: &PgPool, user_id: Uuid, meal_id: &str) -> Result<bool, StoreError> {
    let found = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM saved_meals WHERE user_id = $1 AND meal_id = $2
        )
        "#,
    )
    .bind(user_id)
    .bind(meal_id)
    .fetch_one(db)
    .await?;
    Ok(found)
}

pub async fn insert(db: &PgPool, user_id: Uuid, meal_id: &str) -> Result<(), StoreError> {
    sqlx::query(
        r#"
        INSERT INTO saved_meals (user_id, meal_id)
        VALUES ($1, $2)
        "#,
    )
    .bind(user_id)
    .bind(meal_id)
    .execute(db)
    .await?;
    Ok(())
}

const LIST_MEAL_IDS: &str = r#"
    SELECT meal_id
      FROM saved_meals
     WHERE user_id = $1
     ORDER BY saved_at ASC, seq ASC
"#;

/// Meal ids saved by a user, oldest first.
pub async fn list_meal_ids(db: &PgPool, user_id: Uuid) -> Result<Vec<String>, StoreError> {
    let ids = sqlx::query_scalar::<_, String>(LIST_MEAL_IDS)
        .bind(user_id)
        .fetch_all(db)
        .await?;
    Ok(ids)
}

pub async fn delete(db: &PgPool, user_id: Uuid, meal_id: &str) -> Result<u64, StoreError> {
    let result = sqlx::query(
        r#"
        DELETE FROM saved_meals
         WHERE user_id = $1 AND meal_id = $2
        "#,
    )
    .bind(user_id)
    .bind(meal_id)
    .execute(db)
    .await?;
    Ok(result.rows_affected())
}
