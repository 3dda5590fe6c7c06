use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Create routes for the categories feature, to be nested under `/api/category`
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/", get(handlers::list_categories))
        .route("/create", post(handlers::create_category))
        .route(
            "/{id}",
            get(handlers::get_category)
                .put(handlers::update_category)
                .delete(handlers::delete_category),
        )
        .with_state(service)
}
