use super::*;

#[tokio::test]
async fn health_check_succeeds_for_live_pool() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    storage.health_check().await.expect("health check");
}

#[tokio::test]
async fn missing_slot_reads_as_none() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    assert_eq!(storage.get_slot("absent").await.expect("read"), None);
    assert_eq!(storage.slot_updated_at("absent").await.expect("ts"), None);
}

#[tokio::test]
async fn put_overwrites_previous_value() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    storage.put_slot("profile", b"first").await.expect("write");
    storage.put_slot("profile", b"second").await.expect("overwrite");

    let value = storage.get_slot("profile").await.expect("read");
    assert_eq!(value.as_deref(), Some(&b"second"[..]));
    assert!(storage
        .slot_updated_at("profile")
        .await
        .expect("ts")
        .is_some());
}

#[tokio::test]
async fn remove_reports_whether_slot_existed() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    storage.put_slot("profile", b"value").await.expect("write");

    assert!(storage.remove_slot("profile").await.expect("remove"));
    assert!(!storage.remove_slot("profile").await.expect("remove again"));
    assert_eq!(storage.get_slot("profile").await.expect("read"), None);
}

#[tokio::test]
async fn slots_are_independent_by_key() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    storage.put_slot("a", b"1").await.expect("write a");
    storage.put_slot("b", b"2").await.expect("write b");
    storage.remove_slot("a").await.expect("remove a");

    assert_eq!(storage.get_slot("a").await.expect("read a"), None);
    assert_eq!(
        storage.get_slot("b").await.expect("read b").as_deref(),
        Some(&b"2"[..])
    );
}

#[tokio::test]
async fn memory_store_round_trips_and_removes() {
    let store = MemorySlotStore::new();
    assert_eq!(store.get_slot("k").await.expect("read"), None);

    store.put_slot("k", b"v").await.expect("write");
    assert_eq!(store.get_slot("k").await.expect("read").as_deref(), Some(&b"v"[..]));

    assert!(store.remove_slot("k").await.expect("remove"));
    assert!(!store.remove_slot("k").await.expect("remove again"));
}

#[test]
fn memory_url_has_no_parent_dir() {
    assert_eq!(sqlite_path("sqlite::memory:"), None);
    assert_eq!(
        sqlite_path("sqlite://./data/studio.db?mode=rwc"),
        Some(PathBuf::from("./data/studio.db"))
    );
}
