//! Tutorial repository implementations.
//!
//! - [`PgTutorialRepository`] - PostgreSQL storage via SQLx
//! - [`MemoryTutorialRepository`] - In-process storage for database-less runs and tests

pub mod memory_tutorial_repository;
pub mod pg_tutorial_repository;

pub use memory_tutorial_repository::MemoryTutorialRepository;
pub use pg_tutorial_repository::PgTutorialRepository;
