//! Domain layer containing the tutorial entity and its storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Storage backends implement [`repositories::TutorialRepository`] in
//! [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
