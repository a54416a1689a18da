//! Repository trait for tutorial storage.

use crate::domain::entities::{NewTutorial, Tutorial, TutorialPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for tutorials.
///
/// Lookups by id report a missing record as `Ok(None)`, never as an error.
/// Ids are opaque: an id the backend could never have generated is simply
/// not found.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTutorialRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryTutorialRepository`] - In-process, insertion ordered
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TutorialRepository: Send + Sync {
    /// Returns every tutorial in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self) -> Result<Vec<Tutorial>, AppError>;

    /// Finds a tutorial by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: &str) -> Result<Option<Tutorial>, AppError>;

    /// Persists a new tutorial and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_tutorial: NewTutorial) -> Result<Tutorial, AppError>;

    /// Applies a partial update and returns the post-update record, or
    /// `None` when the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn update(&self, id: &str, patch: TutorialPatch) -> Result<Option<Tutorial>, AppError>;

    /// Removes a tutorial and returns it, or `None` when the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete(&self, id: &str) -> Result<Option<Tutorial>, AppError>;

    /// Removes every tutorial and returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete_all(&self) -> Result<u64, AppError>;

    /// Checks that the backend is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the backend does not respond.
    async fn ping(&self) -> Result<(), AppError>;

    /// Short backend name used in health output.
    fn backend_name(&self) -> &'static str;
}
