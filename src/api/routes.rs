//! REST API route configuration.

use crate::api::handlers::{create_post_handler, delete_post_handler, list_posts_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};

/// The blog CRUD routes.
///
/// # Endpoints
///
/// - `GET    /blogs`       - List all posts
/// - `POST   /blogs`       - Create a post
/// - `DELETE /blogs/{id}`  - Delete a post by id
pub fn blog_routes() -> Router<AppState> {
    Router::new()
        .route("/blogs", get(list_posts_handler).post(create_post_handler))
        .route("/blogs/{id}", delete(delete_post_handler))
}
