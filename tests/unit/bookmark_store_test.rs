//! Unit tests for the BookmarkStore public API.
//!
//! These tests exercise the five storage operations through the
//! `BookmarkStoreTrait` interface, using an in-memory SQLite database.

use bookmarkd::database::Database;
use bookmarkd::store::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use bookmarkd::types::bookmark::{BookmarkPatch, NewBookmark};

/// Helper: a fresh in-memory database.
fn setup() -> Database {
    Database::open_in_memory().expect("Failed to open in-memory database")
}

fn sample(title: &str, url: &str) -> NewBookmark {
    NewBookmark {
        title: title.to_string(),
        url: url.to_string(),
        rating: 3,
        description: Some("a description".to_string()),
    }
}

#[test]
fn test_insert_returns_persisted_record_with_id() {
    let db = setup();
    let conn = db.connection();
    let mut store = BookmarkStore::new(&conn);

    let created = store.insert(&sample("Example", "https://example.com")).unwrap();

    assert!(!created.id.is_empty(), "insert should assign an id");
    assert_eq!(created.title, "Example");
    assert_eq!(created.url, "https://example.com");
    assert_eq!(created.rating, 3);
    assert_eq!(created.description.as_deref(), Some("a description"));
}

#[test]
fn test_insert_assigns_distinct_ids() {
    let db = setup();
    let conn = db.connection();
    let mut store = BookmarkStore::new(&conn);

    let a = store.insert(&sample("A", "https://a.example")).unwrap();
    let b = store.insert(&sample("B", "https://b.example")).unwrap();

    assert_ne!(a.id, b.id);
}

#[test]
fn test_list_all_returns_insertion_order() {
    let db = setup();
    let conn = db.connection();
    let mut store = BookmarkStore::new(&conn);

    store.insert(&sample("First", "https://first.example")).unwrap();
    store.insert(&sample("Second", "https://second.example")).unwrap();
    store.insert(&sample("Third", "https://third.example")).unwrap();

    let all = store.list_all().unwrap();
    let titles: Vec<&str> = all.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, ["First", "Second", "Third"]);
}

#[test]
fn test_list_all_empty_database() {
    let db = setup();
    let conn = db.connection();
    let store = BookmarkStore::new(&conn);

    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn test_get_by_id_roundtrip() {
    let db = setup();
    let conn = db.connection();
    let mut store = BookmarkStore::new(&conn);

    let created = store.insert(&sample("Example", "https://example.com")).unwrap();
    let fetched = store.get_by_id(&created.id).unwrap();

    assert_eq!(fetched, Some(created));
}

#[test]
fn test_get_by_id_absent_is_none() {
    let db = setup();
    let conn = db.connection();
    let store = BookmarkStore::new(&conn);

    let fetched = store.get_by_id("no-such-id").unwrap();
    assert_eq!(fetched, None);
}

#[test]
fn test_update_only_supplied_fields_change() {
    let db = setup();
    let conn = db.connection();
    let mut store = BookmarkStore::new(&conn);

    let created = store.insert(&sample("Old Title", "https://example.com")).unwrap();

    let patch = BookmarkPatch {
        title: Some("New Title".to_string()),
        ..Default::default()
    };
    let affected = store.update(&created.id, &patch).unwrap();
    assert_eq!(affected, 1);

    let after = store.get_by_id(&created.id).unwrap().unwrap();
    assert_eq!(after.title, "New Title");
    assert_eq!(after.url, created.url);
    assert_eq!(after.rating, created.rating);
    assert_eq!(after.description, created.description);
}

#[test]
fn test_update_all_fields() {
    let db = setup();
    let conn = db.connection();
    let mut store = BookmarkStore::new(&conn);

    let created = store.insert(&sample("Old", "https://old.example")).unwrap();

    let patch = BookmarkPatch {
        title: Some("New".to_string()),
        url: Some("https://new.example".to_string()),
        rating: Some(5),
        description: Some("updated".to_string()),
    };
    assert_eq!(store.update(&created.id, &patch).unwrap(), 1);

    let after = store.get_by_id(&created.id).unwrap().unwrap();
    assert_eq!(after.title, "New");
    assert_eq!(after.url, "https://new.example");
    assert_eq!(after.rating, 5);
    assert_eq!(after.description.as_deref(), Some("updated"));
}

#[test]
fn test_update_missing_id_affects_zero_rows() {
    let db = setup();
    let conn = db.connection();
    let mut store = BookmarkStore::new(&conn);

    let patch = BookmarkPatch {
        title: Some("X".to_string()),
        ..Default::default()
    };
    assert_eq!(store.update("no-such-id", &patch).unwrap(), 0);
}

#[test]
fn test_update_empty_patch_is_a_no_op() {
    let db = setup();
    let conn = db.connection();
    let mut store = BookmarkStore::new(&conn);

    let created = store.insert(&sample("Keep", "https://keep.example")).unwrap();
    assert_eq!(store.update(&created.id, &BookmarkPatch::default()).unwrap(), 0);

    let after = store.get_by_id(&created.id).unwrap().unwrap();
    assert_eq!(after.title, "Keep");
}

#[test]
fn test_delete_removes_the_record() {
    let db = setup();
    let conn = db.connection();
    let mut store = BookmarkStore::new(&conn);

    let created = store.insert(&sample("Del Me", "https://del.example")).unwrap();

    assert_eq!(store.delete(&created.id).unwrap(), 1);
    assert_eq!(store.get_by_id(&created.id).unwrap(), None);
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn test_delete_missing_id_affects_zero_rows() {
    let db = setup();
    let conn = db.connection();
    let mut store = BookmarkStore::new(&conn);

    assert_eq!(store.delete("no-such-id").unwrap(), 0);
}

#[test]
fn test_insert_without_description() {
    let db = setup();
    let conn = db.connection();
    let mut store = BookmarkStore::new(&conn);

    let created = store
        .insert(&NewBookmark {
            title: "No description".to_string(),
            url: "https://example.com".to_string(),
            rating: 0,
            description: None,
        })
        .unwrap();

    let fetched = store.get_by_id(&created.id).unwrap().unwrap();
    assert_eq!(fetched.description, None);
    assert_eq!(fetched.rating, 0);
}
