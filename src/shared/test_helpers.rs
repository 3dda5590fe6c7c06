//! In-memory repositories and assertions shared by handler and service tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;
use crate::features::categories::repositories::{
    CategoryChanges, CategoryRepository, NewCategory,
};
use crate::features::users::models::User;
use crate::features::users::repositories::{NewUser, UserChanges, UserRepository};

/// Lowest cost bcrypt accepts; keeps hashing fast in tests
pub const TEST_HASH_COST: u32 = 4;

/// Asserts that exactly one of `data` / `error` is present, matching `success`
pub fn assert_envelope(body: &Value) {
    let success = body["success"]
        .as_bool()
        .expect("envelope must carry a boolean `success`");
    let has_data = body.get("data").is_some();
    let has_error = body.get("error").is_some();

    if success {
        assert!(has_data && !has_error, "success envelope: {}", body);
    } else {
        assert!(has_error && !has_data, "error envelope: {}", body);
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Raw stored row, regardless of its active flag
    pub fn stored(&self, id: Uuid) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: NewUser) -> Result<User> {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: user.username,
            password_hash: user.password_hash,
            email: user.email,
            is_active: true,
            created_by: user.created_by,
            updated_by: None,
            created_at: now,
            updated_at: now,
        };
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn list_active(&self) -> Result<Vec<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.is_active)
            .cloned()
            .collect())
    }

    async fn find_active_by_id(&self, id: Uuid) -> Result<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id && u.is_active)
            .cloned())
    }

    async fn update(&self, id: Uuid, changes: UserChanges) -> Result<Option<User>> {
        let mut users = self.users.lock().unwrap();
        Ok(users.iter_mut().find(|u| u.id == id).map(|u| {
            u.username = changes.username;
            u.password_hash = changes.password_hash;
            u.email = changes.email;
            u.is_active = changes.is_active;
            u.updated_by = changes.updated_by;
            u.updated_at = Utc::now();
            u.clone()
        }))
    }

    async fn deactivate(&self, id: Uuid) -> Result<Option<User>> {
        let mut users = self.users.lock().unwrap();
        Ok(users
            .iter_mut()
            .find(|u| u.id == id && u.is_active)
            .map(|u| {
                u.is_active = false;
                u.updated_at = Utc::now();
                u.clone()
            }))
    }
}

/// Repository whose every call fails the way a lost database would
pub struct FailingUserRepository;

fn unavailable() -> AppError {
    AppError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl UserRepository for FailingUserRepository {
    async fn insert(&self, _user: NewUser) -> Result<User> {
        Err(unavailable())
    }

    async fn list_active(&self) -> Result<Vec<User>> {
        Err(unavailable())
    }

    async fn find_active_by_id(&self, _id: Uuid) -> Result<Option<User>> {
        Err(unavailable())
    }

    async fn update(&self, _id: Uuid, _changes: UserChanges) -> Result<Option<User>> {
        Err(unavailable())
    }

    async fn deactivate(&self, _id: Uuid) -> Result<Option<User>> {
        Err(unavailable())
    }
}

#[derive(Default)]
pub struct InMemoryCategoryRepository {
    categories: Mutex<Vec<Category>>,
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn insert(&self, category: NewCategory) -> Result<Category> {
        let now = Utc::now();
        let category = Category {
            id: Uuid::new_v4(),
            category_name: category.category_name,
            is_active: true,
            created_by: category.created_by,
            updated_by: None,
            created_at: now,
            updated_at: now,
        };
        self.categories.lock().unwrap().push(category.clone());
        Ok(category)
    }

    async fn list_active(&self) -> Result<Vec<Category>> {
        let mut active: Vec<Category> = self
            .categories
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.is_active)
            .cloned()
            .collect();
        active.sort_by(|a, b| a.category_name.cmp(&b.category_name));
        Ok(active)
    }

    async fn find_active_by_id(&self, id: Uuid) -> Result<Option<Category>> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id && c.is_active)
            .cloned())
    }

    async fn update(&self, id: Uuid, changes: CategoryChanges) -> Result<Option<Category>> {
        let mut categories = self.categories.lock().unwrap();
        Ok(categories.iter_mut().find(|c| c.id == id).map(|c| {
            c.category_name = changes.category_name;
            c.is_active = changes.is_active;
            c.updated_by = changes.updated_by;
            c.updated_at = Utc::now();
            c.clone()
        }))
    }

    async fn deactivate(&self, id: Uuid) -> Result<Option<Category>> {
        let mut categories = self.categories.lock().unwrap();
        Ok(categories
            .iter_mut()
            .find(|c| c.id == id && c.is_active)
            .map(|c| {
                c.is_active = false;
                c.updated_at = Utc::now();
                c.clone()
            }))
    }
}
