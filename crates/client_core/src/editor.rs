//! In-memory working copy edited by the studio form.

use shared::domain::ProfileRecord;

/// Holds the record being edited and the last version that was loaded or
/// saved. Edits never touch durable storage.
#[derive(Debug, Clone)]
pub struct ProfileEditor {
    working: ProfileRecord,
    baseline: ProfileRecord,
}

impl ProfileEditor {
    pub fn new(record: ProfileRecord) -> Self {
        Self {
            working: record.clone(),
            baseline: record,
        }
    }

    pub fn record(&self) -> &ProfileRecord {
        &self.working
    }

    pub fn into_record(self) -> ProfileRecord {
        self.working
    }

    /// Swaps in a whole record (after load, reset or import) and treats it as
    /// the new baseline.
    pub fn replace(&mut self, record: ProfileRecord) {
        self.baseline = record.clone();
        self.working = record;
    }

    /// Swaps in a whole record but keeps it unsaved.
    pub fn adopt(&mut self, record: ProfileRecord) {
        self.working = record;
    }

    pub fn mark_saved(&mut self) {
        self.baseline = self.working.clone();
    }

    pub fn is_dirty(&self) -> bool {
        self.working != self.baseline
    }

    pub fn set_owner_name(&mut self, owner_name: impl Into<String>) {
        self.working.owner_name = owner_name.into();
    }

    pub fn set_role(&mut self, role: impl Into<String>) {
        self.working.role = role.into();
    }

    /// Parses the comma-separated textarea. Entries are trimmed; blanks stay.
    pub fn set_video_list_text(&mut self, text: &str) {
        self.working.video_list = text.split(',').map(|id| id.trim().to_string()).collect();
    }

    pub fn video_list_text(&self) -> String {
        self.working.video_list.join(", ")
    }
}
