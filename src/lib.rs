//! # Blog Service
//!
//! A minimal blog CRUD service built with Axum and MongoDB.
//!
//! ## Architecture
//!
//! The crate follows a layered structure:
//!
//! - **Domain Layer** ([`domain`]) - The blog post entity and repository trait
//! - **Infrastructure Layer** ([`infrastructure`]) - MongoDB persistence
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - Server-rendered presentation shell
//!
//! Every API operation is a direct pass-through from an HTTP route to a
//! single store call: no validation, no pagination, no retries. Store errors
//! surface verbatim in the response body's `error` field.
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional; defaults target a local MongoDB on port 27017
//! export MONGODB_URL="mongodb://127.0.0.1:27017"
//! export MONGODB_DATABASE="blogs"
//!
//! # Start the service (listens on 0.0.0.0:5000 by default)
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod web;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::entities::{BlogPost, NewPost};
    pub use crate::domain::repositories::PostRepository;
    pub use crate::error::{AppError, StoreError};
    pub use crate::state::AppState;
}
