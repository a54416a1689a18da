mod common;

use tutorials_api::domain::entities::{NewTutorial, TutorialPatch};
use tutorials_api::domain::repositories::TutorialRepository;
use tutorials_api::infrastructure::persistence::MemoryTutorialRepository;

fn new_tutorial(title: &str) -> NewTutorial {
    NewTutorial {
        title: title.to_string(),
        description: None,
        published: false,
    }
}

#[tokio::test]
async fn test_create_assigns_unique_ids() {
    let repo = MemoryTutorialRepository::new();

    let a = repo.create(new_tutorial("a")).await.unwrap();
    let b = repo.create(new_tutorial("b")).await.unwrap();

    assert_ne!(a.id, b.id);
    assert_eq!(a.created_at, a.updated_at);
}

#[tokio::test]
async fn test_list_in_insertion_order() {
    let repo = MemoryTutorialRepository::new();

    for title in ["first", "second", "third"] {
        repo.create(new_tutorial(title)).await.unwrap();
    }

    let titles: Vec<String> = repo
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.title)
        .collect();

    assert_eq!(titles, ["first", "second", "third"]);
}

#[tokio::test]
async fn test_find_unknown_id_is_none() {
    let repo = MemoryTutorialRepository::with_tutorials(common::sample_tutorials());

    assert!(repo.find_by_id("not-an-id").await.unwrap().is_none());
    assert!(
        repo.find_by_id("4882200e85yytii999")
            .await
            .unwrap()
            .is_some()
    );
}

#[tokio::test]
async fn test_update_returns_post_update_record() {
    let repo = MemoryTutorialRepository::with_tutorials(common::sample_tutorials());

    let updated = repo
        .update(
            "4882200e85yytii999",
            TutorialPatch {
                title: Some("react".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, "react");
    assert_eq!(updated.description.as_deref(), Some("first course"));
    assert!(updated.updated_at >= updated.created_at);
}

#[tokio::test]
async fn test_update_unknown_id_is_none() {
    let repo = MemoryTutorialRepository::new();

    let result = repo
        .update("missing", TutorialPatch::default())
        .await
        .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_delete_removes_only_target() {
    let repo = MemoryTutorialRepository::with_tutorials(common::sample_tutorials());

    let removed = repo.delete("4882200e85yytii999").await.unwrap().unwrap();
    assert_eq!(removed.title, "react native");

    let remaining = repo.list().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].title, "ionic");

    assert!(repo.delete("4882200e85yytii999").await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_all_reports_count() {
    let repo = MemoryTutorialRepository::with_tutorials(common::sample_tutorials());

    assert_eq!(repo.delete_all().await.unwrap(), 2);
    assert_eq!(repo.delete_all().await.unwrap(), 0);
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_ping_and_backend_name() {
    let repo = MemoryTutorialRepository::new();

    assert!(repo.ping().await.is_ok());
    assert_eq!(repo.backend_name(), "memory");
}
