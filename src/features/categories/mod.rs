//! Recipe categories.
//!
//! Mounted under `/api/category` with the same five operations as users;
//! deletes only flip `isactive`.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgCategoryRepository;
pub use services::CategoryService;
