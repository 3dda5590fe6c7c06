mod category_repository;

pub use category_repository::{
    CategoryChanges, CategoryRepository, NewCategory, PgCategoryRepository,
};
