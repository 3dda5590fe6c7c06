//! User management for the recipe application.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/user` | List active users |
//! | GET | `/api/user/{id}` | Get an active user |
//! | POST | `/api/user/create` | Create a user |
//! | PUT | `/api/user/{id}` | Overwrite a user |
//! | DELETE | `/api/user/{id}` | Soft delete a user |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgUserRepository;
pub use services::UserService;
