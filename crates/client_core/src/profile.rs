//! Local-first persistence of the profile record.
//!
//! The record lives in a single durable slot. Reads never fail: anything that
//! cannot be turned into a complete [`ProfileRecord`] is replaced by the
//! built-in default. Writes and imports report their failures.

use shared::domain::ProfileRecord;
use storage::SlotStore;
use thiserror::Error;
use tracing::{debug, info, warn};

pub const PROFILE_SLOT_KEY: &str = "kabutcraft_local_data";
pub const SNAPSHOT_FILE_NAME: &str = "kabutcraft_backup.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("profile payload is not a complete record: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("failed to encode profile record: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("durable slot '{slot}' could not be updated: {reason:#}")]
    Write {
        slot: &'static str,
        reason: anyhow::Error,
    },
}

pub struct ProfileStore<S> {
    slots: S,
}

impl<S: SlotStore> ProfileStore<S> {
    pub fn new(slots: S) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &S {
        &self.slots
    }

    pub async fn load(&self) -> ProfileRecord {
        let raw = match self.slots.get_slot(PROFILE_SLOT_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(slot = PROFILE_SLOT_KEY, "no saved profile; using default");
                return ProfileRecord::default();
            }
            Err(error) => {
                warn!(
                    slot = PROFILE_SLOT_KEY,
                    error = %format!("{error:#}"),
                    "failed to read saved profile; using default"
                );
                return ProfileRecord::default();
            }
        };

        match decode_record(&raw) {
            Ok(record) => record,
            Err(error) => {
                warn!(
                    slot = PROFILE_SLOT_KEY,
                    %error,
                    "saved profile is malformed; using default"
                );
                ProfileRecord::default()
            }
        }
    }

    /// Overwrites the slot with `record`. Last write wins.
    pub async fn save(&self, record: &ProfileRecord) -> Result<(), StoreError> {
        let payload = encode_record(record)?;
        self.slots
            .put_slot(PROFILE_SLOT_KEY, &payload)
            .await
            .map_err(|reason| StoreError::Write {
                slot: PROFILE_SLOT_KEY,
                reason,
            })?;
        info!(
            slot = PROFILE_SLOT_KEY,
            owner = %record.owner_name,
            videos = record.video_list.len(),
            "profile saved"
        );
        Ok(())
    }

    /// Erases the slot and hands back the default record.
    pub async fn reset(&self) -> Result<ProfileRecord, StoreError> {
        let existed = self
            .slots
            .remove_slot(PROFILE_SLOT_KEY)
            .await
            .map_err(|reason| StoreError::Write {
                slot: PROFILE_SLOT_KEY,
                reason,
            })?;
        info!(slot = PROFILE_SLOT_KEY, existed, "profile reset to default");
        Ok(ProfileRecord::default())
    }

    pub fn export_snapshot(&self, record: &ProfileRecord) -> Result<Vec<u8>, StoreError> {
        encode_record(record)
    }

    /// Decodes a user-supplied backup. Payloads missing a field or carrying a
    /// field of the wrong type are refused; unknown extra fields are ignored.
    pub fn import_snapshot(&self, bytes: &[u8]) -> Result<ProfileRecord, StoreError> {
        let record = decode_record(bytes)?;
        debug!(owner = %record.owner_name, "snapshot imported");
        Ok(record)
    }
}

fn encode_record(record: &ProfileRecord) -> Result<Vec<u8>, StoreError> {
    serde_json::to_vec(record).map_err(StoreError::Encode)
}

fn decode_record(bytes: &[u8]) -> Result<ProfileRecord, StoreError> {
    serde_json::from_slice(bytes).map_err(StoreError::Decode)
}
