//! Presentation shell route configuration.

use crate::state::AppState;
use crate::web::handlers::home_handler;
use axum::{Router, routing::get};

/// Presentation shell routes.
///
/// # Endpoints
///
/// - `GET /` - Static home page with header and greeting cards
pub fn shell_routes() -> Router<AppState> {
    Router::new().route("/", get(home_handler))
}
