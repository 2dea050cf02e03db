//! Document store persistence implementations.

mod mongo_post_repository;

pub use mongo_post_repository::MongoPostRepository;
