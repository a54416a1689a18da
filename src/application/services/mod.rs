//! Application services.
//!
//! - [`TutorialService`] - Tutorial CRUD and outcome-to-error mapping

pub mod tutorial_service;

pub use tutorial_service::TutorialService;
