use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// User record in the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String, // bcrypt, never serialized
    pub profile: Option<String>,
}

/// Public projection served by `GET /user/:id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub profile: Option<String>,
}

impl From<&User> for UserProfile {
    fn from(u: &User) -> Self {
        Self {
            id: u.id,
            name: u.name.clone(),
            email: u.email.clone(),
            profile: u.profile.clone(),
        }
    }
}
