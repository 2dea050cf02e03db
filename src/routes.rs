//! Top-level router configuration combining API and shell routes.
//!
//! # Route Structure
//!
//! - `GET  /`             - Presentation shell home page
//! - `POST /blogs`        - Create a post
//! - `GET  /blogs`        - List posts
//! - `DELETE /blogs/{id}` - Delete a post
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Unconditionally permissive (any origin, method, header)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// `state` carries the shared store handle injected into all handlers.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(web::routes::shell_routes())
        .merge(api::routes::blog_routes())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
