//! Repository trait definitions for data access.
//!
//! Implementations live in [`crate::infrastructure::persistence`].

pub mod tutorial_repository;

pub use tutorial_repository::TutorialRepository;

#[cfg(test)]
pub use tutorial_repository::MockTutorialRepository;
