//! API route configuration.

use crate::api::handlers::{
    create_tutorial_handler, delete_all_tutorials_handler, delete_tutorial_handler,
    get_tutorial_handler, list_tutorials_handler, update_tutorial_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Tutorial routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET    /tutorials`       - List all tutorials
/// - `POST   /tutorials`       - Create a tutorial
/// - `DELETE /tutorials`       - Delete all tutorials
/// - `GET    /tutorials/{id}`  - Get one tutorial
/// - `PUT    /tutorials/{id}`  - Partially update a tutorial
/// - `DELETE /tutorials/{id}`  - Delete one tutorial
pub fn tutorial_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/tutorials",
            get(list_tutorials_handler)
                .post(create_tutorial_handler)
                .delete(delete_all_tutorials_handler),
        )
        .route(
            "/tutorials/{id}",
            get(get_tutorial_handler)
                .put(update_tutorial_handler)
                .delete(delete_tutorial_handler),
        )
}
