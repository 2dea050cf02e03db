//! REST API request handlers.

mod posts;

pub use posts::{create_post_handler, delete_post_handler, list_posts_handler};
