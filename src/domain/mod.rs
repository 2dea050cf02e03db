//! Domain layer: entities and repository interfaces.

pub mod entities;
pub mod repositories;
