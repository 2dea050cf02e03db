//! Domain entities.

mod post;

pub use post::{BlogPost, NewPost};
