//! Repository trait for blog post data access.

use crate::domain::entities::{BlogPost, NewPost};
use crate::error::StoreError;
use async_trait::async_trait;

/// Repository interface for the posts collection.
///
/// Each method is a single store round trip; the service layers no logic,
/// validation, or retries on top.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MongoPostRepository`] - MongoDB implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Inserts a new post; the store assigns the id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] with the driver's message on any insert failure.
    async fn insert(&self, new_post: NewPost) -> Result<BlogPost, StoreError>;

    /// Returns all posts in store-native order (no explicit sort).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] with the driver's message on query failure.
    async fn list(&self) -> Result<Vec<BlogPost>, StoreError>;

    /// Deletes the post matching `id` and returns the removed record.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(post))` if a post matched and was removed
    /// - `Ok(None)` if no post matched
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store rejects the operation, including
    /// when `id` is not a well-formed object id.
    async fn delete_by_id(&self, id: &str) -> Result<Option<BlogPost>, StoreError>;
}
