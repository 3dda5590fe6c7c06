use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{
    CategoryResponseDto, CreateCategoryDto, UpdateCategoryDto,
};
use crate::features::categories::repositories::{
    CategoryChanges, CategoryRepository, NewCategory,
};

/// Service for category operations
pub struct CategoryService {
    repository: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        let category = self
            .repository
            .insert(NewCategory {
                category_name: dto.category_name,
                created_by: dto.created_by,
            })
            .await?;

        tracing::info!(
            "Category created: id={}, name={}",
            category.id,
            category.category_name
        );

        Ok(category.into())
    }

    /// List all active categories
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = self.repository.list_active().await?;
        Ok(categories.into_iter().map(|c| c.into()).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<CategoryResponseDto> {
        self.repository
            .find_active_by_id(id)
            .await?
            .map(|c| c.into())
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))
    }

    pub async fn update(&self, id: Uuid, dto: UpdateCategoryDto) -> Result<CategoryResponseDto> {
        let changes = CategoryChanges {
            category_name: dto.category_name,
            is_active: dto.is_active,
            updated_by: dto.updated_by,
        };

        self.repository
            .update(id, changes)
            .await?
            .map(|c| c.into())
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))
    }

    /// Soft delete
    pub async fn delete(&self, id: Uuid) -> Result<CategoryResponseDto> {
        let category = self
            .repository
            .deactivate(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

        tracing::info!("Category deactivated: id={}", category.id);

        Ok(category.into())
    }
}
