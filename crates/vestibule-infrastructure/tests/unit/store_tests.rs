//! SQLite credential store tests

use std::sync::Arc;

use chrono::TimeDelta;
use uuid::Uuid;
use vestibule_domain::error::Error;
use vestibule_domain::ports::{Clock, CredentialStore, PasswordHashing};
use vestibule_infrastructure::persistence::SqliteCredentialStore;

use crate::support::{ManualClock, fast_hasher};

const CREATED_AT: i64 = 1_700_000_000;

fn memory_store() -> (SqliteCredentialStore, Arc<ManualClock>) {
    let clock = ManualClock::at(CREATED_AT);
    let store = SqliteCredentialStore::open_in_memory(fast_hasher(), clock.clone()).unwrap();
    (store, clock)
}

#[test]
fn test_create_then_find_verifies_original_password_only() {
    let (store, _) = memory_store();
    let created = store.create("alice", "a@x.io", "s3cret").unwrap();

    let found = store.find_by_username("alice").unwrap().unwrap();
    assert_eq!(found, created);
    assert_eq!(found.email, "a@x.io");
    assert!(found.is_active);
    assert!(found.last_login_at.is_none());
    assert_eq!(found.created_at.timestamp(), CREATED_AT);

    let hasher = fast_hasher();
    assert!(hasher.verify("s3cret", &found.password_hash).unwrap());
    assert!(!hasher.verify("S3cret", &found.password_hash).unwrap());
}

#[test]
fn test_password_is_never_stored_in_plaintext() {
    let (store, _) = memory_store();
    let created = store.create("alice", "a@x.io", "s3cret").unwrap();
    assert_ne!(created.password_hash.as_str(), "s3cret");
    assert!(created.password_hash.as_str().starts_with("$2b$"));
}

#[test]
fn test_duplicate_username_is_distinct_error() {
    let (store, _) = memory_store();
    let first = store.create("alice", "a@x.io", "pw1").unwrap();

    let err = store.create("alice", "other@x.io", "pw2").unwrap_err();
    assert!(matches!(err, Error::DuplicateUsername { ref username } if username == "alice"));

    // The original row is untouched
    let found = store.find_by_username("alice").unwrap().unwrap();
    assert_eq!(found.uuid, first.uuid);
    assert_eq!(found.email, "a@x.io");
}

#[test]
fn test_usernames_are_case_sensitive() {
    let (store, _) = memory_store();
    store.create("alice", "a@x.io", "pw").unwrap();

    assert!(store.find_by_username("Alice").unwrap().is_none());
    assert!(store.create("Alice", "b@x.io", "pw").is_ok());
}

#[test]
fn test_missing_user_is_absence_not_error() {
    let (store, _) = memory_store();
    assert!(store.find_by_username("nobody").unwrap().is_none());
    assert!(store.find_by_uuid(&Uuid::new_v4()).unwrap().is_none());
}

#[test]
fn test_each_identity_gets_a_fresh_uuid() {
    let (store, _) = memory_store();
    let alice = store.create("alice", "a@x.io", "pw").unwrap();
    let bob = store.create("bob", "b@x.io", "pw").unwrap();

    assert_ne!(alice.uuid, bob.uuid);
    assert_eq!(store.find_by_uuid(&bob.uuid).unwrap().unwrap().username, "bob");
}

#[test]
fn test_username_with_sql_metacharacters_is_stored_verbatim() {
    let (store, _) = memory_store();
    let name = "robert'); DROP TABLE users;--";
    store.create(name, "r@x.io", "pw").unwrap();

    assert_eq!(store.find_by_username(name).unwrap().unwrap().username, name);
    assert!(store.find_by_username("alice").unwrap().is_none());
}

#[test]
fn test_record_login_stamps_timestamps() {
    let (store, clock) = memory_store();
    let created = store.create("alice", "a@x.io", "pw").unwrap();

    clock.advance(TimeDelta::minutes(5));
    assert!(store.record_login(&created.uuid, clock.now()).unwrap());

    let found = store.find_by_uuid(&created.uuid).unwrap().unwrap();
    assert_eq!(found.last_login_at, Some(clock.now()));
    assert_eq!(found.updated_at, clock.now());
    assert_eq!(found.created_at, created.created_at);
}

#[test]
fn test_record_login_for_unknown_uuid_is_noop() {
    let (store, clock) = memory_store();
    assert!(!store.record_login(&Uuid::new_v4(), clock.now()).unwrap());
}

#[test]
fn test_file_store_creates_parent_dir_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("auth").join("users.db");
    let clock = ManualClock::at(CREATED_AT);

    let uuid = {
        let store = SqliteCredentialStore::open(&path, fast_hasher(), clock.clone()).unwrap();
        store.create("alice", "a@x.io", "pw").unwrap().uuid
    };
    assert!(path.exists());

    let reopened = SqliteCredentialStore::open(&path, fast_hasher(), clock).unwrap();
    assert_eq!(
        reopened.find_by_username("alice").unwrap().unwrap().uuid,
        uuid
    );
}

#[test]
fn test_memory_path_opens_private_database() {
    let clock = ManualClock::at(CREATED_AT);
    let store = SqliteCredentialStore::open(
        std::path::Path::new(":memory:"),
        fast_hasher(),
        clock,
    )
    .unwrap();
    assert!(store.create("alice", "a@x.io", "pw").is_ok());
}

#[test]
fn test_store_is_shareable_across_threads() {
    let (store, _) = memory_store();
    let store = Arc::new(store);

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || store.create(&format!("user{i}"), "u@x.io", "pw"))
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().is_ok());
    }
    for i in 0..4 {
        assert!(store.find_by_username(&format!("user{i}")).unwrap().is_some());
    }
}
