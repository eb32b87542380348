//! PostgreSQL tag repository integration tests.
//!
//! These need a reachable database (`DATABASE_URL`, or the default test URL
//! in `test_fixtures`). Run with `cargo test -p tagkeep-db -- --ignored`.

use tagkeep_db::test_fixtures::TestDatabase;
use tagkeep_db::TagRepository;

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_create_then_get() {
    dotenvy::dotenv().ok();
    let db = TestDatabase::new().await;

    let created = db.tags.create("test").await.expect("create failed");
    assert_eq!(created.id, 1);
    assert_eq!(created.name, "test");

    let fetched = db
        .tags
        .get(created.id)
        .await
        .expect("get failed")
        .expect("tag should exist");
    assert_eq!(fetched, created);

    assert!(db.tags.get(999).await.expect("get failed").is_none());

    db.cleanup().await;
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_search_substring_literal_wildcards() {
    dotenvy::dotenv().ok();
    let db = TestDatabase::new().await;

    db.tags.create("rustacean").await.unwrap();
    db.tags.create("python").await.unwrap();
    db.tags.create("trust").await.unwrap();
    db.tags.create("50%_off").await.unwrap();

    let names: Vec<String> = db
        .tags
        .search("rust")
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, vec!["rustacean", "trust"]);

    // Wildcards match only themselves.
    let found = db.tags.search("%").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "50%_off");
    assert_eq!(db.tags.search("_").await.unwrap().len(), 1);

    // Case-sensitive.
    assert!(db.tags.search("RUST").await.unwrap().is_empty());

    db.cleanup().await;
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_update_and_reset() {
    dotenvy::dotenv().ok();
    let db = TestDatabase::new().await;

    let tag = db.tags.create("test").await.unwrap();
    let updated = db
        .tags
        .update(tag.id, "new-name")
        .await
        .unwrap()
        .expect("tag should exist");
    assert_eq!(updated.id, tag.id);
    assert_eq!(updated.name, "new-name");

    assert!(db.tags.update(999, "ghost").await.unwrap().is_none());

    db.tags.reset().await.unwrap();
    assert!(db.tags.get(tag.id).await.unwrap().is_none());
    let again = db.tags.create("again").await.unwrap();
    assert_eq!(again.id, 1, "reset should restart id assignment");

    db.cleanup().await;
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_empty_name_rejected_by_check_constraint() {
    dotenvy::dotenv().ok();
    let db = TestDatabase::new().await;

    let err = db.tags.create("   ").await.unwrap_err();
    assert!(matches!(err, tagkeep_db::Error::Database(_)));

    db.cleanup().await;
}
