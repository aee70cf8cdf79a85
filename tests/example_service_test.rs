//! Example service unit tests.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;
use uuid::Uuid;

use example_service::domain::{CreateExample, Example, ExampleFilter, UpdateExample};
use example_service::errors::AppError;
use example_service::infra::MockExampleRepository;
use example_service::services::{ExampleManager, ExampleService};

const ACTOR: &str = "tester";

fn create_test_example(id: i64, code: &str) -> Example {
    Example {
        id,
        code: code.to_string(),
        example: "an example".to_string(),
        created_at: Utc::now(),
        created_by: ACTOR.to_string(),
        updated_at: None,
        updated_by: None,
        deleted_at: None,
        deleted_by: None,
        uuid: Uuid::new_v4(),
    }
}

fn service(repo: MockExampleRepository) -> ExampleManager {
    ExampleManager::new(Arc::new(repo), ACTOR)
}

#[tokio::test]
async fn test_list_examples_passes_filter_through() {
    let filter = ExampleFilter::new("test", "10", "");
    let expected = filter.clone();

    let mut repo = MockExampleRepository::new();
    repo.expect_find_all()
        .withf(move |f| *f == expected)
        .times(1)
        .returning(|_| Ok(vec![create_test_example(1, "A"), create_test_example(2, "B")]));

    let result = service(repo).list_examples(filter).await;

    assert_eq!(result.unwrap().len(), 2);
}

#[tokio::test]
async fn test_get_example_success() {
    let mut repo = MockExampleRepository::new();
    repo.expect_find_by_id()
        .with(eq(7))
        .returning(|id| Ok(Some(create_test_example(id, "EX-7"))));

    let result = service(repo).get_example(7).await;

    assert_eq!(result.unwrap().id, 7);
}

#[tokio::test]
async fn test_get_example_not_found() {
    let mut repo = MockExampleRepository::new();
    repo.expect_find_by_id().returning(|_| Ok(None));

    let result = service(repo).get_example(99).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_create_example_stamps_actor() {
    let mut repo = MockExampleRepository::new();
    repo.expect_find_by_code()
        .withf(|code| code == "EX-1")
        .returning(|_| Ok(None));
    repo.expect_create()
        .withf(|input, actor| input.code == "EX-1" && actor == ACTOR)
        .times(1)
        .returning(|input, actor| {
            let mut example = create_test_example(1, &input.code);
            example.created_by = actor.to_string();
            Ok(example)
        });

    let input = CreateExample {
        code: "EX-1".to_string(),
        example: "first".to_string(),
    };
    let created = service(repo).create_example(input).await.unwrap();

    assert_eq!(created.code, "EX-1");
    assert_eq!(created.created_by, ACTOR);
}

#[tokio::test]
async fn test_create_example_rejects_duplicate_code() {
    let mut repo = MockExampleRepository::new();
    repo.expect_find_by_code()
        .returning(|code| Ok(Some(create_test_example(3, code))));
    repo.expect_create().never();

    let input = CreateExample {
        code: "EX-1".to_string(),
        example: "first".to_string(),
    };
    let result = service(repo).create_example(input).await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
}

#[tokio::test]
async fn test_create_example_validates_before_touching_repository() {
    let mut repo = MockExampleRepository::new();
    repo.expect_find_by_code().never();
    repo.expect_create().never();

    let input = CreateExample {
        code: String::new(),
        example: "first".to_string(),
    };
    let result = service(repo).create_example(input).await;

    match result.unwrap_err() {
        AppError::Validation(msg) => assert!(msg.contains("Code")),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_update_example_allows_keeping_own_code() {
    let mut repo = MockExampleRepository::new();
    repo.expect_find_by_code()
        .returning(|code| Ok(Some(create_test_example(5, code))));
    repo.expect_update()
        .withf(|id, _, actor| *id == 5 && actor == ACTOR)
        .returning(|id, input, _| {
            let mut example = create_test_example(id, &input.code.unwrap_or_default());
            example.updated_by = Some(ACTOR.to_string());
            Ok(example)
        });

    let input = UpdateExample {
        code: Some("EX-5".to_string()),
        example: None,
    };
    let updated = service(repo).update_example(5, input).await.unwrap();

    assert_eq!(updated.updated_by.as_deref(), Some(ACTOR));
}

#[tokio::test]
async fn test_update_example_requires_a_field() {
    let mut repo = MockExampleRepository::new();
    repo.expect_update().never();

    let result = service(repo)
        .update_example(5, UpdateExample::default())
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
}

#[tokio::test]
async fn test_delete_example_propagates_not_found() {
    let mut repo = MockExampleRepository::new();
    repo.expect_delete()
        .withf(|id, actor| *id == 4 && actor == ACTOR)
        .returning(|_, _| Err(AppError::NotFound));

    let result = service(repo).delete_example(4).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_restore_example_success() {
    let mut repo = MockExampleRepository::new();
    repo.expect_restore()
        .returning(|id, _| Ok(create_test_example(id, "EX-9")));

    let restored = service(repo).restore_example(9).await.unwrap();

    assert!(restored.is_active());
}

#[tokio::test]
async fn test_list_examples_surfaces_timeout() {
    let mut repo = MockExampleRepository::new();
    repo.expect_find_all()
        .returning(|_| Err(AppError::Timeout(std::time::Duration::from_secs(5))));

    let result = service(repo).list_examples(ExampleFilter::default()).await;

    assert!(matches!(result.unwrap_err(), AppError::Timeout(_)));
}
