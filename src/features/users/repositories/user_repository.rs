use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::users::models::User;

/// Row values for a new user; the password is already hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub created_by: Option<String>,
}

/// Full replacement values for an existing user
#[derive(Debug, Clone)]
pub struct UserChanges {
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub is_active: bool,
    pub updated_by: Option<String>,
}

/// Data access for `recipe.users`.
///
/// Lookups that match no row return `Ok(None)`; callers decide whether that is
/// a not-found condition.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: NewUser) -> Result<User>;

    async fn list_active(&self) -> Result<Vec<User>>;

    async fn find_active_by_id(&self, id: Uuid) -> Result<Option<User>>;

    async fn update(&self, id: Uuid, changes: UserChanges) -> Result<Option<User>>;

    /// Soft delete: flips `isactive` to false on an active row
    async fn deactivate(&self, id: Uuid) -> Result<Option<User>>;
}

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn insert(&self, user: NewUser) -> Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO recipe.users (username, passwordhash, email, createdby)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, passwordhash, email, isactive, createdby, updatedby, createdat, updatedat
            "#,
        )
        .bind(user.username)
        .bind(user.password_hash)
        .bind(user.email)
        .bind(user.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert user: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn list_active(&self) -> Result<Vec<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, passwordhash, email, isactive, createdby, updatedby, createdat, updatedat
            FROM recipe.users
            WHERE isactive = TRUE
            ORDER BY createdat
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list users: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find_active_by_id(&self, id: Uuid) -> Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, passwordhash, email, isactive, createdby, updatedby, createdat, updatedat
            FROM recipe.users
            WHERE id = $1 AND isactive = TRUE
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get user by id: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn update(&self, id: Uuid, changes: UserChanges) -> Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE recipe.users
            SET username = $1,
                passwordhash = $2,
                email = $3,
                isactive = $4,
                updatedby = $5,
                updatedat = NOW()
            WHERE id = $6
            RETURNING id, username, passwordhash, email, isactive, createdby, updatedby, createdat, updatedat
            "#,
        )
        .bind(changes.username)
        .bind(changes.password_hash)
        .bind(changes.email)
        .bind(changes.is_active)
        .bind(changes.updated_by)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update user: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn deactivate(&self, id: Uuid) -> Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE recipe.users
            SET isactive = FALSE, updatedat = NOW()
            WHERE id = $1 AND isactive = TRUE
            RETURNING id, username, passwordhash, email, isactive, createdby, updatedby, createdat, updatedat
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete user: {:?}", e);
            AppError::Database(e)
        })
    }
}
