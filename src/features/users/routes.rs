use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::users::handlers;
use crate::features::users::services::UserService;

/// Create routes for the users feature, to be nested under `/api/user`
pub fn routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route("/", get(handlers::list_users))
        .route("/create", post(handlers::create_user))
        .route(
            "/{id}",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .with_state(service)
}
