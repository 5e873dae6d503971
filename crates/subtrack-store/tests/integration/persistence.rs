//! Persistence tests against the file backend: round-trips, corruption
//! fallback, and seed-once semantics.

use crate::common::fields;
use subtrack_store::{JsonFileBackend, StorageBackend, SubscriptionStore};

#[test]
fn test_persist_reload_roundtrip_is_field_for_field_equal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("subscriptions.json");

    let mut store = SubscriptionStore::load(JsonFileBackend::new(&path));
    store.add(fields("Added After Seed", 42.25)).unwrap();
    let snapshot: Vec<_> = store.list().to_vec();

    let reloaded = SubscriptionStore::load(JsonFileBackend::new(&path));
    assert_eq!(reloaded.list(), snapshot.as_slice());
}

#[test]
fn test_first_mutation_persists_seed_plus_change() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("subscriptions.json");

    // Nothing on disk until the first mutation persists.
    let mut store = SubscriptionStore::load(JsonFileBackend::new(&path));
    assert!(!path.exists());

    store.add(fields("Test", 100.0)).unwrap();
    assert!(path.exists());

    let reloaded = SubscriptionStore::load(JsonFileBackend::new(&path));
    assert_eq!(reloaded.len(), 7);
}

#[test]
fn test_corrupt_file_falls_back_to_seed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("subscriptions.json");
    std::fs::write(&path, "\"definitely not a record array").unwrap();

    let store = SubscriptionStore::load(JsonFileBackend::new(&path));
    assert_eq!(store.len(), 6);
    assert_eq!(store.list()[0].name, "Myntra Insider");
}

#[test]
fn test_seed_once_user_data_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("subscriptions.json");

    // User deletes everything; an empty persisted list is real state and
    // must not be re-seeded on the next load.
    let mut store = SubscriptionStore::load(JsonFileBackend::new(&path));
    let ids: Vec<_> = store.list().iter().map(|s| s.id).collect();
    for id in ids {
        store.remove(id).unwrap();
    }
    assert!(store.is_empty());

    let reloaded = SubscriptionStore::load(JsonFileBackend::new(&path));
    assert!(reloaded.is_empty());
}

#[test]
fn test_persisted_payload_uses_wire_field_names() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("subscriptions.json");

    let mut store = SubscriptionStore::load(JsonFileBackend::new(&path));
    store.add(fields("Wire Check", 10.0)).unwrap();

    let backend = JsonFileBackend::new(&path);
    let payload = backend.read().unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
    let last = value.as_array().unwrap().last().unwrap();
    assert!(last.get("renewalDate").is_some());
    assert!(last.get("renewalCycle").is_some());
    assert!(last.get("renewal_date").is_none());
}
