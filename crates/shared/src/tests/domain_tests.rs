use super::*;

#[test]
fn default_record_has_five_videos() {
    let record = ProfileRecord::default();
    assert_eq!(record.owner_name, "Mist Haze");
    assert_eq!(record.role, "Pemilik Youtube Kabut Craft Studio");
    assert_eq!(record.video_list.len(), 5);
    assert_eq!(record.video_list[0], "Q_j1aCXi12Q");
}

#[test]
fn serializes_with_camel_case_field_names() {
    let record = ProfileRecord {
        owner_name: "A".into(),
        role: "B".into(),
        video_list: vec!["x".into()],
    };
    let json = serde_json::to_value(&record).expect("encode");
    assert_eq!(
        json,
        serde_json::json!({ "ownerName": "A", "role": "B", "videoList": ["x"] })
    );
}

#[test]
fn missing_field_is_rejected() {
    let err = serde_json::from_str::<ProfileRecord>(r#"{"ownerName":"A","role":"B"}"#)
        .expect_err("videoList is required");
    assert!(err.to_string().contains("videoList"));
}

#[test]
fn legacy_youtube_id_field_is_ignored() {
    let record: ProfileRecord = serde_json::from_str(
        r#"{"ownerName":"A","youtubeId":"Q_j1aCXi12Q","videoList":[],"role":"B"}"#,
    )
    .expect("decode legacy backup");
    assert_eq!(record.owner_name, "A");
    assert!(record.video_list.is_empty());
}

#[test]
fn visible_videos_skips_blank_entries_only() {
    let record = ProfileRecord {
        owner_name: "A".into(),
        role: "B".into(),
        video_list: vec!["a".into(), "".into(), "a".into(), "b".into()],
    };
    let visible: Vec<_> = record.visible_videos().collect();
    assert_eq!(visible, vec!["a", "a", "b"]);
    assert_eq!(record.video_list.len(), 4);
}
