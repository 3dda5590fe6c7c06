use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::users::dtos::{CreateUserDto, UpdateUserDto, UserResponseDto};
use crate::features::users::repositories::{NewUser, UserChanges, UserRepository};

/// Service for user operations
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    hash_cost: u32,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self::with_hash_cost(repository, bcrypt::DEFAULT_COST)
    }

    pub fn with_hash_cost(repository: Arc<dyn UserRepository>, hash_cost: u32) -> Self {
        Self {
            repository,
            hash_cost,
        }
    }

    pub async fn create(&self, dto: CreateUserDto) -> Result<UserResponseDto> {
        let password_hash = self.hash_password(dto.password).await?;

        let user = self
            .repository
            .insert(NewUser {
                username: dto.username,
                password_hash,
                email: dto.email,
                created_by: dto.created_by,
            })
            .await?;

        tracing::info!("User created: id={}, username={}", user.id, user.username);

        Ok(user.into())
    }

    /// List all active users
    pub async fn list(&self) -> Result<Vec<UserResponseDto>> {
        let users = self.repository.list_active().await?;
        Ok(users.into_iter().map(|u| u.into()).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<UserResponseDto> {
        self.repository
            .find_active_by_id(id)
            .await?
            .map(|u| u.into())
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Overwrite every field of the user
    pub async fn update(&self, id: Uuid, dto: UpdateUserDto) -> Result<UserResponseDto> {
        let password_hash = self.hash_password(dto.password).await?;

        let changes = UserChanges {
            username: dto.username,
            password_hash,
            email: dto.email,
            is_active: dto.is_active,
            updated_by: dto.updated_by,
        };

        self.repository
            .update(id, changes)
            .await?
            .map(|u| u.into())
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Soft delete
    pub async fn delete(&self, id: Uuid) -> Result<UserResponseDto> {
        let user = self
            .repository
            .deactivate(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        tracing::info!("User deactivated: id={}", user.id);

        Ok(user.into())
    }

    async fn hash_password(&self, password: String) -> Result<String> {
        let cost = self.hash_cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AppError::Internal(format!("Password hashing task failed: {}", e)))?
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{
        FailingUserRepository, InMemoryUserRepository, TEST_HASH_COST,
    };

    fn service_with(repository: Arc<dyn UserRepository>) -> UserService {
        UserService::with_hash_cost(repository, TEST_HASH_COST)
    }

    fn create_dto(username: &str) -> CreateUserDto {
        CreateUserDto {
            username: username.to_string(),
            password: "secret".to_string(),
            email: format!("{}@example.com", username),
            created_by: None,
        }
    }

    #[tokio::test]
    async fn test_create_stores_bcrypt_hash() {
        let repository = Arc::new(InMemoryUserRepository::default());
        let service = service_with(repository.clone());

        let created = service.create(create_dto("johndoe")).await.unwrap();

        let stored = repository.stored(created.id).unwrap();
        assert_ne!(stored.password_hash, "secret");
        assert!(bcrypt::verify("secret", &stored.password_hash).unwrap());
    }

    #[tokio::test]
    async fn test_get_by_id_missing_is_not_found() {
        let service = service_with(Arc::new(InMemoryUserRepository::default()));

        let err = service.get_by_id(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_replaces_password_hash() {
        let repository = Arc::new(InMemoryUserRepository::default());
        let service = service_with(repository.clone());
        let created = service.create(create_dto("johndoe")).await.unwrap();

        let updated = service
            .update(
                created.id,
                UpdateUserDto {
                    username: "janedoe".to_string(),
                    password: "changed".to_string(),
                    email: "jane@example.com".to_string(),
                    is_active: true,
                    updated_by: Some("admin".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.username, "janedoe");
        assert_eq!(updated.updated_by.as_deref(), Some("admin"));
        let stored = repository.stored(created.id).unwrap();
        assert!(bcrypt::verify("changed", &stored.password_hash).unwrap());
    }

    #[tokio::test]
    async fn test_delete_twice_is_not_found() {
        let service = service_with(Arc::new(InMemoryUserRepository::default()));
        let created = service.create(create_dto("johndoe")).await.unwrap();

        let deleted = service.delete(created.id).await.unwrap();
        assert!(!deleted.is_active);

        let err = service.delete(created.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_repository_failure_propagates() {
        let service = service_with(Arc::new(FailingUserRepository));

        let err = service.list().await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }
}
