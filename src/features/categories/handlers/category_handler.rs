use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::categories::dtos::{
    CategoryResponseDto, CreateCategoryDto, UpdateCategoryDto,
};
use crate::features::categories::services::CategoryService;
use crate::shared::types::ApiResponse;

/// Create a new category
#[utoipa::path(
    post,
    path = "/api/category/create",
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<Vec<CategoryResponseDto>>),
        (status = 400, description = "Missing or empty fields"),
        (status = 500, description = "Internal server error")
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(service): State<Arc<CategoryService>>,
    AppJson(dto): AppJson<CreateCategoryDto>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<CategoryResponseDto>>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let category = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            vec![category],
            Some("Category created successfully".to_string()),
        )),
    ))
}

/// List all active categories
#[utoipa::path(
    get,
    path = "/api/category",
    responses(
        (status = 200, description = "List of active categories", body = ApiResponse<Vec<CategoryResponseDto>>),
        (status = 500, description = "Internal server error")
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<ApiResponse<Vec<CategoryResponseDto>>>> {
    let categories = service.list().await?;
    Ok(Json(ApiResponse::success(
        categories,
        Some("Categories retrieved successfully".to_string()),
    )))
}

/// Get an active category by id
#[utoipa::path(
    get,
    path = "/api/category/{id}",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<Vec<CategoryResponseDto>>),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<Vec<CategoryResponseDto>>>> {
    let category = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(
        vec![category],
        Some("Category retrieved successfully".to_string()),
    )))
}

/// Update a category
#[utoipa::path(
    put,
    path = "/api/category/{id}",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<Vec<CategoryResponseDto>>),
        (status = 400, description = "Missing or empty fields"),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn update_category(
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateCategoryDto>,
) -> Result<Json<ApiResponse<Vec<CategoryResponseDto>>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let category = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        vec![category],
        Some("Category updated successfully".to_string()),
    )))
}

/// Delete a category (soft delete)
#[utoipa::path(
    delete,
    path = "/api/category/{id}",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category deactivated", body = ApiResponse<Vec<CategoryResponseDto>>),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn delete_category(
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<Vec<CategoryResponseDto>>>> {
    let category = service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        vec![category],
        Some("Category deleted successfully".to_string()),
    )))
}
