use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for `recipe.categories`
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: Uuid,
    #[sqlx(rename = "categoryname")]
    pub category_name: String,
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
