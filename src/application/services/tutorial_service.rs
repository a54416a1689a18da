//! Tutorial management service.

use crate::domain::entities::{NewTutorial, Tutorial, TutorialPatch};
use crate::domain::repositories::TutorialRepository;
use crate::error::AppError;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Message returned when a create or update carries an empty title.
pub const TITLE_REQUIRED: &str = "Title can not be empty!";

const NO_TUTORIALS: &str = "No tutorials found.";
const UPDATE_NOT_FOUND: &str = "Not Found";
const DELETE_ALL_FAILED: &str = "Some error occurred while removing all tutorials.";

/// Service for reading and mutating tutorials.
///
/// The repository is injected at construction; every operation performs at
/// most one repository call and maps the outcome onto [`AppError`]:
/// - missing record -> [`AppError::NotFound`]
/// - storage failure -> [`AppError::Internal`] carrying the storage message
pub struct TutorialService {
    repository: Arc<dyn TutorialRepository>,
}

impl TutorialService {
    /// Creates a new tutorial service.
    pub fn new(repository: Arc<dyn TutorialRepository>) -> Self {
        Self { repository }
    }

    /// Lists all tutorials in store order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the store holds no tutorials.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_tutorials(&self) -> Result<Vec<Tutorial>, AppError> {
        let tutorials = self.repository.list().await?;

        if tutorials.is_empty() {
            return Err(AppError::not_found(NO_TUTORIALS));
        }

        Ok(tutorials)
    }

    /// Retrieves one tutorial. The id is passed through to the store as is.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no tutorial has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_tutorial(&self, id: &str) -> Result<Tutorial, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Not found Tutorial with id {id}")))
    }

    /// Creates a tutorial.
    ///
    /// The title is checked before the store is touched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the title is blank.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create_tutorial(&self, new_tutorial: NewTutorial) -> Result<Tutorial, AppError> {
        ensure_title(&new_tutorial.title)?;

        let created = self.repository.create(new_tutorial).await?;
        info!(id = %created.id, "Tutorial created");

        Ok(created)
    }

    /// Applies a partial update and returns the post-update record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a blank title is supplied.
    /// Returns [`AppError::NotFound`] if no tutorial has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn update_tutorial(
        &self,
        id: &str,
        patch: TutorialPatch,
    ) -> Result<Tutorial, AppError> {
        if let Some(title) = &patch.title {
            ensure_title(title)?;
        }

        if patch.is_empty() {
            debug!(id, "Empty update requested");
        }

        let updated = self
            .repository
            .update(id, patch)
            .await?
            .ok_or_else(|| AppError::not_found(UPDATE_NOT_FOUND))?;

        info!(id, "Tutorial updated");
        Ok(updated)
    }

    /// Deletes one tutorial and returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no tutorial has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete_tutorial(&self, id: &str) -> Result<Tutorial, AppError> {
        let removed = self.repository.delete(id).await?.ok_or_else(|| {
            AppError::not_found(format!(
                "Cannot delete Tutorial with id={id}. Maybe Tutorial was not found!"
            ))
        })?;

        info!(id, "Tutorial deleted");
        Ok(removed)
    }

    /// Deletes every tutorial and returns the number removed. Zero is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] with a generic message on storage errors;
    /// the underlying cause is logged, not returned.
    pub async fn delete_all_tutorials(&self) -> Result<u64, AppError> {
        let removed = self.repository.delete_all().await.map_err(|e| {
            error!(error = %e, "Failed to delete all tutorials");
            AppError::internal(DELETE_ALL_FAILED)
        })?;

        info!(removed, "All tutorials deleted");
        Ok(removed)
    }

    /// Probes the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store is unreachable.
    pub async fn check_store(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    /// Name of the backing store (`postgres`, `memory`).
    pub fn store_backend(&self) -> &'static str {
        self.repository.backend_name()
    }
}

fn ensure_title(title: &str) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::bad_request(TITLE_REQUIRED));
    }
    Ok(())
}
