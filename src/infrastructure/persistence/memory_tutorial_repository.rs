//! In-memory implementation of the tutorial repository.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{NewTutorial, Tutorial, TutorialPatch};
use crate::domain::repositories::TutorialRepository;
use crate::error::AppError;
use crate::utils::id_generator::generate_id;

/// Tutorials held in a vector behind an async lock.
///
/// Insertion order is preserved, so [`TutorialRepository::list`] returns
/// records in the order they were created. Nothing survives a restart.
///
/// # Use Cases
///
/// - Running the service without a configured database
/// - Fake store for handler tests
#[derive(Debug, Default)]
pub struct MemoryTutorialRepository {
    tutorials: RwLock<Vec<Tutorial>>,
}

impl MemoryTutorialRepository {
    pub fn new() -> Self {
        debug!("Using in-memory tutorial store");
        Self::default()
    }

    /// Creates a repository pre-populated with `tutorials`, kept in the given order.
    pub fn with_tutorials(tutorials: Vec<Tutorial>) -> Self {
        Self {
            tutorials: RwLock::new(tutorials),
        }
    }
}

#[async_trait]
impl TutorialRepository for MemoryTutorialRepository {
    async fn list(&self) -> Result<Vec<Tutorial>, AppError> {
        Ok(self.tutorials.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Tutorial>, AppError> {
        let tutorials = self.tutorials.read().await;
        Ok(tutorials.iter().find(|t| t.id == id).cloned())
    }

    async fn create(&self, new_tutorial: NewTutorial) -> Result<Tutorial, AppError> {
        let tutorial = Tutorial::from_new(generate_id(), new_tutorial, Utc::now());

        self.tutorials.write().await.push(tutorial.clone());

        Ok(tutorial)
    }

    async fn update(&self, id: &str, patch: TutorialPatch) -> Result<Option<Tutorial>, AppError> {
        let mut tutorials = self.tutorials.write().await;

        Ok(tutorials.iter_mut().find(|t| t.id == id).map(|tutorial| {
            tutorial.apply(patch, Utc::now());
            tutorial.clone()
        }))
    }

    async fn delete(&self, id: &str) -> Result<Option<Tutorial>, AppError> {
        let mut tutorials = self.tutorials.write().await;

        Ok(tutorials
            .iter()
            .position(|t| t.id == id)
            .map(|index| tutorials.remove(index)))
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        let mut tutorials = self.tutorials.write().await;
        let removed = tutorials.len() as u64;
        tutorials.clear();
        Ok(removed)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
