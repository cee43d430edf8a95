//! Integration tests for tag listing and attachment.

use jotpad_db::test_fixtures::TestDatabase;
use jotpad_db::{Error, TagRepository};

fn tags(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[tokio::test]
async fn test_attach_collapses_duplicates_and_whitespace() {
    let test_db = TestDatabase::new().await;
    let note = test_db.seed_note("t", "b", &[]).await;

    test_db
        .db
        .tags
        .attach_to_note(note.id, &tags(&["a", "a", " b "]))
        .await
        .unwrap();

    let attached = test_db.db.tags.get_for_note(note.id).await.unwrap();
    assert_eq!(attached, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(test_db.count_rows("tags").await, 2);
    assert_eq!(test_db.count_rows("note_tags").await, 2);

    test_db.cleanup().await;
}

#[tokio::test]
async fn test_attach_skips_blank_names() {
    let test_db = TestDatabase::new().await;
    let note = test_db.seed_note("t", "b", &[]).await;

    test_db
        .db
        .tags
        .attach_to_note(note.id, &tags(&["", "   ", "home"]))
        .await
        .unwrap();

    assert_eq!(test_db.count_rows("tags").await, 1);
    assert_eq!(
        test_db.db.tags.get_for_note(note.id).await.unwrap(),
        vec!["home".to_string()]
    );

    test_db.cleanup().await;
}

#[tokio::test]
async fn test_attach_is_idempotent() {
    let test_db = TestDatabase::new().await;
    let note = test_db.seed_note("t", "b", &[]).await;

    for _ in 0..3 {
        test_db
            .db
            .tags
            .attach_to_note(note.id, &tags(&["errand", "home"]))
            .await
            .unwrap();
    }

    assert_eq!(test_db.count_rows("tags").await, 2);
    assert_eq!(test_db.count_rows("note_tags").await, 2);

    test_db.cleanup().await;
}

#[tokio::test]
async fn test_attach_reuses_existing_tag_rows() {
    let test_db = TestDatabase::new().await;
    let first = test_db.seed_note("one", "1", &["shared"]).await;
    let second = test_db.seed_note("two", "2", &["shared"]).await;

    assert_eq!(test_db.count_rows("tags").await, 1);
    assert_eq!(test_db.db.tags.get_for_note(first.id).await.unwrap(), vec!["shared"]);
    assert_eq!(test_db.db.tags.get_for_note(second.id).await.unwrap(), vec!["shared"]);

    test_db.cleanup().await;
}

#[tokio::test]
async fn test_attach_to_unknown_note_creates_nothing() {
    let test_db = TestDatabase::new().await;

    match test_db.db.tags.attach_to_note(99, &tags(&["errand"])).await {
        Err(Error::NotFound(msg)) => assert_eq!(msg, "Note not found"),
        other => panic!("expected NotFound, got {:?}", other),
    }
    assert_eq!(test_db.count_rows("tags").await, 0);
    assert_eq!(test_db.count_rows("note_tags").await, 0);

    test_db.cleanup().await;
}

#[tokio::test]
async fn test_tag_names_are_case_sensitive() {
    let test_db = TestDatabase::new().await;
    let note = test_db.seed_note("t", "b", &[]).await;

    test_db
        .db
        .tags
        .attach_to_note(note.id, &tags(&["Home", "home"]))
        .await
        .unwrap();

    assert_eq!(test_db.count_rows("tags").await, 2);

    test_db.cleanup().await;
}

#[tokio::test]
async fn test_list_tags_sorted_by_name() {
    let test_db = TestDatabase::new().await;
    test_db.seed_note("t", "b", &["zeta", "alpha", "mid"]).await;

    let listed = test_db.db.tags.list().await.unwrap();
    let names: Vec<&str> = listed.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "mid", "zeta"]);

    // ids follow creation order, not name order
    let zeta = listed.iter().find(|t| t.name == "zeta").unwrap();
    assert_eq!(zeta.id, 1);

    test_db.cleanup().await;
}

#[tokio::test]
async fn test_list_tags_empty() {
    let test_db = TestDatabase::new().await;
    assert!(test_db.db.tags.list().await.unwrap().is_empty());
    test_db.cleanup().await;
}
