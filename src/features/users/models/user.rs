use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for `recipe.users`
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[sqlx(rename = "passwordhash")]
    pub password_hash: String,
    pub email: String,
    #[sqlx(rename = "isactive")]
    pub is_active: bool,
    #[sqlx(rename = "createdby")]
    pub created_by: Option<String>,
    #[sqlx(rename = "updatedby")]
    pub updated_by: Option<String>,
    #[sqlx(rename = "createdat")]
    pub created_at: DateTime<Utc>,
    #[sqlx(rename = "updatedat")]
    pub updated_at: DateTime<Utc>,
}
