use super::*;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use shared::domain::ProfileRecord;
use storage::{MemorySlotStore, SlotStore};

struct BrokenSlotStore;

#[async_trait]
impl SlotStore for BrokenSlotStore {
    async fn get_slot(&self, _key: &str) -> Result<Option<Vec<u8>>> {
        Err(anyhow!("disk unavailable"))
    }

    async fn put_slot(&self, _key: &str, _value: &[u8]) -> Result<()> {
        Err(anyhow!("quota exceeded"))
    }

    async fn remove_slot(&self, _key: &str) -> Result<bool> {
        Err(anyhow!("disk unavailable"))
    }
}

fn sample_record() -> ProfileRecord {
    ProfileRecord {
        owner_name: "Kabut".into(),
        role: "Editor".into(),
        video_list: vec!["abc".into(), "".into(), "abc".into()],
    }
}

#[tokio::test]
async fn fresh_store_loads_default_record() {
    let store = ProfileStore::new(MemorySlotStore::new());
    let record = store.load().await;
    assert_eq!(record, ProfileRecord::default());
    assert_eq!(record.video_list.len(), 5);
}

#[tokio::test]
async fn save_then_load_round_trips_including_blank_entries() {
    let store = ProfileStore::new(MemorySlotStore::new());
    let record = sample_record();
    store.save(&record).await.expect("save");
    assert_eq!(store.load().await, record);
}

#[tokio::test]
async fn save_overwrites_previous_record() {
    let store = ProfileStore::new(MemorySlotStore::new());
    store.save(&sample_record()).await.expect("first save");
    let mut second = sample_record();
    second.owner_name = "Second".into();
    store.save(&second).await.expect("second save");
    assert_eq!(store.load().await.owner_name, "Second");
}

#[tokio::test]
async fn garbage_in_slot_falls_back_to_default() {
    let store = ProfileStore::new(MemorySlotStore::new());
    store
        .slots()
        .put_slot(PROFILE_SLOT_KEY, b"\xff{not json")
        .await
        .expect("write garbage");
    assert_eq!(store.load().await, ProfileRecord::default());
}

#[tokio::test]
async fn partial_record_in_slot_falls_back_to_whole_default() {
    let store = ProfileStore::new(MemorySlotStore::new());
    store
        .slots()
        .put_slot(PROFILE_SLOT_KEY, br#"{"ownerName":"Only Name"}"#)
        .await
        .expect("write partial");
    assert_eq!(store.load().await, ProfileRecord::default());
}

#[tokio::test]
async fn unreadable_backend_falls_back_to_default() {
    let store = ProfileStore::new(BrokenSlotStore);
    assert_eq!(store.load().await, ProfileRecord::default());
}

#[tokio::test]
async fn write_failure_is_reported() {
    let store = ProfileStore::new(BrokenSlotStore);
    let err = store.save(&sample_record()).await.expect_err("write fails");
    assert!(matches!(err, StoreError::Write { slot, .. } if slot == PROFILE_SLOT_KEY));
    assert!(err.to_string().contains("quota exceeded"));
}

#[tokio::test]
async fn reset_is_idempotent_and_clears_slot() {
    let store = ProfileStore::new(MemorySlotStore::new());
    store.save(&sample_record()).await.expect("save");

    let first = store.reset().await.expect("reset");
    assert_eq!(first, ProfileRecord::default());
    assert_eq!(store.slots().get_slot(PROFILE_SLOT_KEY).await.expect("read"), None);

    let second = store.reset().await.expect("reset again");
    assert_eq!(second, first);
    assert_eq!(store.slots().get_slot(PROFILE_SLOT_KEY).await.expect("read"), None);
}

#[tokio::test]
async fn export_then_import_round_trips() {
    let store = ProfileStore::new(MemorySlotStore::new());
    let record = sample_record();
    let bytes = store.export_snapshot(&record).expect("export");
    assert_eq!(store.import_snapshot(&bytes).expect("import"), record);
}

#[tokio::test]
async fn export_matches_slot_encoding() {
    let store = ProfileStore::new(MemorySlotStore::new());
    let record = sample_record();
    store.save(&record).await.expect("save");
    let stored = store
        .slots()
        .get_slot(PROFILE_SLOT_KEY)
        .await
        .expect("read")
        .expect("slot present");
    assert_eq!(store.export_snapshot(&record).expect("export"), stored);
}

#[test]
fn import_rejects_payload_missing_fields() {
    let store = ProfileStore::new(MemorySlotStore::new());
    let err = store
        .import_snapshot(br#"{"ownerName":"A","role":"B"}"#)
        .expect_err("missing videoList");
    assert!(matches!(err, StoreError::Decode(_)));
}

#[test]
fn import_rejects_wrong_field_types() {
    let store = ProfileStore::new(MemorySlotStore::new());
    let err = store
        .import_snapshot(br#"{"ownerName":1,"role":"B","videoList":[]}"#)
        .expect_err("ownerName must be a string");
    assert!(matches!(err, StoreError::Decode(_)));
}

#[test]
fn import_ignores_unknown_fields() {
    let store = ProfileStore::new(MemorySlotStore::new());
    let record = store
        .import_snapshot(br#"{"ownerName":"A","role":"B","videoList":["x"],"theme":"dark"}"#)
        .expect("extra fields are tolerated");
    assert_eq!(record.video_list, vec!["x".to_string()]);
}

#[test]
fn editor_tracks_edits_without_persisting() {
    let mut editor = ProfileEditor::new(ProfileRecord::default());
    assert!(!editor.is_dirty());

    editor.set_owner_name("New Name");
    editor.set_role("Animator");
    assert!(editor.is_dirty());
    assert_eq!(editor.record().owner_name, "New Name");

    editor.mark_saved();
    assert!(!editor.is_dirty());
}

#[test]
fn editor_splits_video_text_and_keeps_blanks() {
    let mut editor = ProfileEditor::new(ProfileRecord::default());
    editor.set_video_list_text(" a , ,b,");
    assert_eq!(
        editor.record().video_list,
        vec!["a".to_string(), String::new(), "b".to_string(), String::new()]
    );
    assert_eq!(editor.video_list_text(), "a, , b, ");
}

#[test]
fn editor_replace_resets_baseline() {
    let mut editor = ProfileEditor::new(ProfileRecord::default());
    editor.set_owner_name("Draft");
    editor.replace(sample_record());
    assert!(!editor.is_dirty());

    editor.adopt(ProfileRecord::default());
    assert!(editor.is_dirty());
    assert_eq!(editor.into_record(), ProfileRecord::default());
}
