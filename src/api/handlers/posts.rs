//! Handlers for the blog post endpoints (create, list, delete).
//!
//! Each handler is a direct request → store → response translation. Store
//! failures are passed through with their original message; see
//! [`crate::error`] for the status mapping.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::{CreatePostRequest, DeleteResponse, PostResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a blog post from whatever fields the request carries.
///
/// # Endpoint
///
/// `POST /blogs`
///
/// # Request Body
///
/// ```json
/// {
///   "author": "A",           // optional
///   "articleHeading": "H",   // optional
///   "content": "C"           // optional
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with the store's message if the insert fails.
pub async fn create_post_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostResponse>), AppError> {
    let post = state
        .posts
        .insert(payload.into())
        .await
        .map_err(|e| AppError::bad_request(e.to_string()))?;

    Ok((StatusCode::CREATED, Json(post.into())))
}

/// Lists all blog posts.
///
/// # Endpoint
///
/// `GET /blogs`
///
/// # Ordering
///
/// Store-native: no sort is applied, so the order is whatever the store
/// returns (typically insertion order, not guaranteed).
///
/// # Errors
///
/// Returns 500 Internal Server Error with the store's message on failure.
pub async fn list_posts_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<PostResponse>>, AppError> {
    let posts = state
        .posts
        .list()
        .await
        .map_err(|e| AppError::internal(e.to_string()))?;

    Ok(Json(posts.into_iter().map(Into::into).collect()))
}

/// Deletes the blog post matching `id`.
///
/// # Endpoint
///
/// `DELETE /blogs/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no post matches.
/// Returns 500 Internal Server Error with the store's message on any other
/// failure, including a malformed id.
pub async fn delete_post_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, AppError> {
    let removed = state
        .posts
        .delete_by_id(&id)
        .await
        .map_err(|e| AppError::internal(e.to_string()))?;

    match removed {
        Some(post) => Ok(Json(DeleteResponse {
            message: "Blog deleted".to_string(),
            deleted: post.into(),
        })),
        None => Err(AppError::not_found("Not found")),
    }
}
