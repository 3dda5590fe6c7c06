use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::users::models::User;

/// Request DTO for creating a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    #[validate(length(min = 1, message = "Username is required"))]
    #[schema(example = "johndoe")]
    pub username: String,

    /// Plain-text password; stored as a bcrypt hash
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "secret")]
    pub password: String,

    #[validate(length(min = 1, message = "Email is required"))]
    #[schema(example = "johndoe@example.com")]
    pub email: String,

    pub created_by: Option<String>,
}

/// Request DTO for updating a user. Every field is overwritten.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    pub is_active: bool,

    pub updated_by: Option<String>,
}

/// Response DTO for user. The password hash is never exposed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseDto {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub is_active: bool,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponseDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            email: u.email,
            is_active: u.is_active,
            created_by: u.created_by,
            updated_by: u.updated_by,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}
