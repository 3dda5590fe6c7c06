pub mod categories;
pub mod users;
