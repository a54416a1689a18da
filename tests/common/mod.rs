#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{Duration, Utc};
use std::sync::Arc;
use tutorials_api::AppError;
use tutorials_api::domain::entities::{NewTutorial, Tutorial, TutorialPatch};
use tutorials_api::domain::repositories::TutorialRepository;
use tutorials_api::infrastructure::persistence::MemoryTutorialRepository;
use tutorials_api::routes::router;
use tutorials_api::state::AppState;

pub const STORE_FAILURE: &str = "store unavailable";

/// Repository whose every call fails, for exercising the 500 paths.
pub struct FailingRepository;

#[async_trait]
impl TutorialRepository for FailingRepository {
    async fn list(&self) -> Result<Vec<Tutorial>, AppError> {
        Err(AppError::internal(STORE_FAILURE))
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<Tutorial>, AppError> {
        Err(AppError::internal(STORE_FAILURE))
    }

    async fn create(&self, _new_tutorial: NewTutorial) -> Result<Tutorial, AppError> {
        Err(AppError::internal(STORE_FAILURE))
    }

    async fn update(
        &self,
        _id: &str,
        _patch: TutorialPatch,
    ) -> Result<Option<Tutorial>, AppError> {
        Err(AppError::internal(STORE_FAILURE))
    }

    async fn delete(&self, _id: &str) -> Result<Option<Tutorial>, AppError> {
        Err(AppError::internal(STORE_FAILURE))
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        Err(AppError::internal(STORE_FAILURE))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::internal(STORE_FAILURE))
    }

    fn backend_name(&self) -> &'static str {
        "failing"
    }
}

pub fn tutorial(id: &str, title: &str, description: &str, published: bool) -> Tutorial {
    let now = Utc::now();
    Tutorial {
        id: id.to_string(),
        title: title.to_string(),
        description: Some(description.to_string()),
        published,
        created_at: now,
        updated_at: now,
    }
}

/// Two records in a fixed order, the second created a second later.
pub fn sample_tutorials() -> Vec<Tutorial> {
    let first = tutorial("4882200e85yytii999", "react native", "first course", true);
    let mut second = tutorial("4882200e85ytteeetii999", "ionic", "mobile development", true);
    second.created_at = first.created_at + Duration::seconds(1);
    second.updated_at = second.created_at;
    vec![first, second]
}

pub fn server_with_repository(repository: Arc<dyn TutorialRepository>) -> TestServer {
    let state = AppState::new(repository);
    TestServer::new(router(state, "*")).unwrap()
}

pub fn empty_server() -> TestServer {
    server_with_repository(Arc::new(MemoryTutorialRepository::new()))
}

pub fn seeded_server() -> TestServer {
    server_with_repository(Arc::new(MemoryTutorialRepository::with_tutorials(
        sample_tutorials(),
    )))
}

pub fn failing_server() -> TestServer {
    server_with_repository(Arc::new(FailingRepository))
}
