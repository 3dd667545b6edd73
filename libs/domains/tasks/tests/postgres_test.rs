//! Repository tests against a real PostgreSQL server
//!
//! Same repository, Postgres DDL instead of SQLite. Needs a Docker daemon:
//!
//! ```text
//! cargo test -p domain_tasks --test postgres_test -- --ignored
//! ```

use domain_tasks::*;
use test_utils::{TestDataBuilder, TestPostgres, assertions::*};

async fn setup() -> (TestPostgres, SqlTaskRepository) {
    let db = TestPostgres::new().await;
    ensure_schema(&db.connection).await.unwrap();
    let repo = SqlTaskRepository::new(db.connection());
    (db, repo)
}

fn new_task(title: String, category: Option<&str>, priority: TaskPriority, deadline: &str) -> NewTask {
    NewTask {
        title,
        description: Some("from postgres".to_string()),
        category: category.map(String::from),
        priority,
        deadline: models::parse_deadline(deadline).unwrap(),
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_postgres_task_lifecycle() {
    let (db, repo) = setup().await;
    let builder = TestDataBuilder::from_test_name("postgres_lifecycle");

    // Second bootstrap against an existing table is a no-op
    ensure_schema(&db.connection).await.unwrap();

    let created = repo
        .create(new_task(builder.name("task", "main"), Some("work"), TaskPriority::Low, &builder.date(5)))
        .await
        .unwrap();
    assert!(created.id > 0);

    let fetched = assert_some(repo.get_by_id(created.id).await.unwrap(), "task should exist");
    assert_eq!(fetched, created);

    let changes = TaskChanges {
        priority: Some(TaskPriority::High),
        description: Some(None),
        ..Default::default()
    };
    let updated = repo.update(created.id, changes).await.unwrap();
    assert_eq!(updated.priority, TaskPriority::High);
    assert_eq!(updated.description, None);
    assert_eq!(updated.category.as_deref(), Some("work"));
    assert_eq!(updated.deadline, created.deadline);

    assert!(repo.delete(created.id).await.unwrap());
    assert!(!repo.delete(created.id).await.unwrap());
    assert!(repo.get_by_id(created.id).await.unwrap().is_none());

    let next = repo
        .create(new_task(builder.name("task", "next"), None, TaskPriority::Low, &builder.date(1)))
        .await
        .unwrap();
    assert!(next.id > created.id);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_postgres_filters_and_sorting() {
    let (_db, repo) = setup().await;
    let builder = TestDataBuilder::from_test_name("postgres_list");

    for (suffix, category, priority, days) in [
        ("late", Some("work"), TaskPriority::High, 40),
        ("early", Some("work"), TaskPriority::High, 2),
        ("middle", Some("home"), TaskPriority::High, 15),
        ("other", Some("work"), TaskPriority::Low, 1),
    ] {
        repo.create(new_task(builder.name("task", suffix), category, priority, &builder.date(days)))
            .await
            .unwrap();
    }

    let by_deadline = repo
        .list(
            TaskQuery::new()
                .with_category("work")
                .with_priority(TaskPriority::High)
                .sorted_by(TaskSort::DeadlineAsc),
        )
        .await
        .unwrap();
    assert_eq!(by_deadline.len(), 2);
    assert_sorted_by(&by_deadline, |t| t.deadline, "deadline ascending");
    assert_eq!(by_deadline[0].title, builder.name("task", "early"));

    let newest_first = repo
        .list(TaskQuery::new().sorted_by(TaskSort::CreatedAtDesc))
        .await
        .unwrap();
    assert_eq!(newest_first.len(), 4);
    assert_sorted_by(&newest_first, |t| std::cmp::Reverse(t.created_at), "createdAt descending");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_postgres_rejects_empty_title_at_storage() {
    let (_db, repo) = setup().await;
    let builder = TestDataBuilder::from_test_name("postgres_check");

    let created = repo
        .create(new_task(builder.name("task", "main"), None, TaskPriority::Medium, &builder.date(3)))
        .await
        .unwrap();

    let changes = TaskChanges {
        title: Some(String::new()),
        ..Default::default()
    };
    let result = repo.update(created.id, changes).await;
    assert!(matches!(result, Err(TaskError::Database { .. })));
}
