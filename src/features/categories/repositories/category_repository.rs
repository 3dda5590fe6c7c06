use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub category_name: String,
    pub created_by: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CategoryChanges {
    pub category_name: String,
    pub is_active: bool,
    pub updated_by: Option<String>,
}

/// Data access for `recipe.categories`
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: NewCategory) -> Result<Category>;

    async fn list_active(&self) -> Result<Vec<Category>>;

    async fn find_active_by_id(&self, id: Uuid) -> Result<Option<Category>>;

    async fn update(&self, id: Uuid, changes: CategoryChanges) -> Result<Option<Category>>;

    async fn deactivate(&self, id: Uuid) -> Result<Option<Category>>;
}

pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn insert(&self, category: NewCategory) -> Result<Category> {
        sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO recipe.categories (categoryname, createdby)
            VALUES ($1, $2)
            RETURNING id, categoryname, isactive, createdby, updatedby, createdat, updatedat
            "#,
        )
        .bind(category.category_name)
        .bind(category.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert category: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn list_active(&self) -> Result<Vec<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, categoryname, isactive, createdby, updatedby, createdat, updatedat
            FROM recipe.categories
            WHERE isactive = TRUE
            ORDER BY categoryname
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find_active_by_id(&self, id: Uuid) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, categoryname, isactive, createdby, updatedby, createdat, updatedat
            FROM recipe.categories
            WHERE id = $1 AND isactive = TRUE
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get category by id: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn update(&self, id: Uuid, changes: CategoryChanges) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            UPDATE recipe.categories
            SET categoryname = $1,
                isactive = $2,
                updatedby = $3,
                updatedat = NOW()
            WHERE id = $4
            RETURNING id, categoryname, isactive, createdby, updatedby, createdat, updatedat
            "#,
        )
        .bind(changes.category_name)
        .bind(changes.is_active)
        .bind(changes.updated_by)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update category: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn deactivate(&self, id: Uuid) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            UPDATE recipe.categories
            SET isactive = FALSE, updatedat = NOW()
            WHERE id = $1 AND isactive = TRUE
            RETURNING id, categoryname, isactive, createdby, updatedby, createdat, updatedat
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete category: {:?}", e);
            AppError::Database(e)
        })
    }
}
