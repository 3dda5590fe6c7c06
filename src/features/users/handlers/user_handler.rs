use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::users::dtos::{CreateUserDto, UpdateUserDto, UserResponseDto};
use crate::features::users::services::UserService;
use crate::shared::types::ApiResponse;

/// Create a new user
#[utoipa::path(
    post,
    path = "/api/user/create",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "The user was successfully created", body = ApiResponse<Vec<UserResponseDto>>),
        (status = 400, description = "Missing or empty fields"),
        (status = 500, description = "Internal server error")
    ),
    tag = "users"
)]
pub async fn create_user(
    State(service): State<Arc<UserService>>,
    AppJson(dto): AppJson<CreateUserDto>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<UserResponseDto>>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let user = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            vec![user],
            Some("User created successfully".to_string()),
        )),
    ))
}

/// List all active users
#[utoipa::path(
    get,
    path = "/api/user",
    responses(
        (status = 200, description = "The list of active users", body = ApiResponse<Vec<UserResponseDto>>),
        (status = 500, description = "Internal server error")
    ),
    tag = "users"
)]
pub async fn list_users(
    State(service): State<Arc<UserService>>,
) -> Result<Json<ApiResponse<Vec<UserResponseDto>>>> {
    let users = service.list().await?;
    Ok(Json(ApiResponse::success(
        users,
        Some("Users retrieved successfully".to_string()),
    )))
}

/// Get an active user by id
#[utoipa::path(
    get,
    path = "/api/user/{id}",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = ApiResponse<Vec<UserResponseDto>>),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
pub async fn get_user(
    State(service): State<Arc<UserService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<Vec<UserResponseDto>>>> {
    let user = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(
        vec![user],
        Some("User retrieved successfully".to_string()),
    )))
}

/// Update a user, overwriting every field
#[utoipa::path(
    put,
    path = "/api/user/{id}",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "The user was updated", body = ApiResponse<Vec<UserResponseDto>>),
        (status = 400, description = "Missing or empty fields"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "users"
)]
pub async fn update_user(
    State(service): State<Arc<UserService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateUserDto>,
) -> Result<Json<ApiResponse<Vec<UserResponseDto>>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let user = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        vec![user],
        Some("User updated successfully".to_string()),
    )))
}

/// Delete a user (soft delete)
#[utoipa::path(
    delete,
    path = "/api/user/{id}",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user was deactivated", body = ApiResponse<Vec<UserResponseDto>>),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
pub async fn delete_user(
    State(service): State<Arc<UserService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<Vec<UserResponseDto>>>> {
    let user = service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        vec![user],
        Some("User deleted successfully".to_string()),
    )))
}
