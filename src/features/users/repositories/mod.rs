mod user_repository;

pub use user_repository::{NewUser, PgUserRepository, UserChanges, UserRepository};
