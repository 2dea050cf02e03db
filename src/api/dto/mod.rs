//! Request and response DTOs for the REST API.

mod post;

pub use post::{CreatePostRequest, DeleteResponse, PostResponse};
