//! Core domain entities.
//!
//! - [`Tutorial`] - A persisted tutorial record
//! - [`NewTutorial`] - Input for creating a record
//! - [`TutorialPatch`] - Partial update of an existing record

pub mod tutorial;

pub use tutorial::{NewTutorial, Tutorial, TutorialPatch};
