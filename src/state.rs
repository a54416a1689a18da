//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::TutorialService;
use crate::domain::repositories::TutorialRepository;

/// Application state cloned into each request.
///
/// Holds services only; the storage backend is chosen once at startup and
/// injected through [`AppState::new`].
#[derive(Clone)]
pub struct AppState {
    pub tutorial_service: Arc<TutorialService>,
}

impl AppState {
    /// Builds the state around a tutorial repository.
    pub fn new(repository: Arc<dyn TutorialRepository>) -> Self {
        Self {
            tutorial_service: Arc::new(TutorialService::new(repository)),
        }
    }
}
