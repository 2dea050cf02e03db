#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use blog_service::domain::entities::{BlogPost, NewPost};
use blog_service::domain::repositories::PostRepository;
use blog_service::error::StoreError;
use blog_service::state::AppState;
use mongodb::bson::oid::ObjectId;

/// In-memory stand-in for the posts collection.
///
/// Mirrors the MongoDB repository's contract: ids are hex object ids assigned
/// on insert, listing preserves insertion order, and a malformed id on delete
/// is a store error rather than a miss.
pub struct InMemoryPostRepository {
    posts: Mutex<Vec<BlogPost>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: Mutex::new(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.posts.lock().unwrap().len()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, new_post: NewPost) -> Result<BlogPost, StoreError> {
        let post = BlogPost::new(
            ObjectId::new().to_hex(),
            new_post.author,
            new_post.article_heading,
            new_post.content,
        );

        self.posts.lock().unwrap().push(post.clone());
        Ok(post)
    }

    async fn list(&self) -> Result<Vec<BlogPost>, StoreError> {
        Ok(self.posts.lock().unwrap().clone())
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<BlogPost>, StoreError> {
        let oid = ObjectId::parse_str(id).map_err(|e| StoreError(e.to_string()))?;
        let id = oid.to_hex();

        let mut posts = self.posts.lock().unwrap();
        match posts.iter().position(|p| p.id == id) {
            Some(index) => Ok(Some(posts.remove(index))),
            None => Ok(None),
        }
    }
}

/// Repository whose every operation fails with the same store message.
pub struct FailingPostRepository {
    pub message: String,
}

impl FailingPostRepository {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl PostRepository for FailingPostRepository {
    async fn insert(&self, _new_post: NewPost) -> Result<BlogPost, StoreError> {
        Err(StoreError(self.message.clone()))
    }

    async fn list(&self) -> Result<Vec<BlogPost>, StoreError> {
        Err(StoreError(self.message.clone()))
    }

    async fn delete_by_id(&self, _id: &str) -> Result<Option<BlogPost>, StoreError> {
        Err(StoreError(self.message.clone()))
    }
}

pub fn create_test_state() -> (AppState, Arc<InMemoryPostRepository>) {
    let posts = Arc::new(InMemoryPostRepository::new());
    (AppState::new(posts.clone()), posts)
}

pub fn create_failing_state(message: &str) -> AppState {
    AppState::new(Arc::new(FailingPostRepository::new(message)))
}
