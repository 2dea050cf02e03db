//! Repository traits defining data access interfaces.

mod post_repository;

pub use post_repository::PostRepository;

#[cfg(test)]
pub use post_repository::MockPostRepository;
