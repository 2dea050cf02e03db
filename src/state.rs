//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::domain::repositories::PostRepository;

/// Application state shared across all request handlers.
///
/// Owns the single store handle for the process lifetime: acquired at
/// startup, dropped at shutdown, never reconnected in between.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Creates application state around the post repository handle.
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }
}
