use serde::{Deserialize, Serialize};

pub const DEFAULT_OWNER_NAME: &str = "Mist Haze";
pub const DEFAULT_ROLE: &str = "Pemilik Youtube Kabut Craft Studio";
pub const DEFAULT_VIDEO_LIST: [&str; 5] = [
    "Q_j1aCXi12Q",
    "dQw4w9WgXcQ",
    "7p9r7K2z6-M",
    "y6120QOlsfU",
    "L_jWHffIx5E",
];

/// The editable profile shown on every page of the portfolio.
///
/// Field names on the wire stay camelCase so backups written by earlier
/// portal versions decode unchanged. Every field is required: a payload that
/// omits one is rejected as a whole rather than merged with defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub owner_name: String,
    pub role: String,
    /// External video ids in display order. Blank entries are kept here and
    /// only skipped when rendering.
    pub video_list: Vec<String>,
}

impl Default for ProfileRecord {
    fn default() -> Self {
        Self {
            owner_name: DEFAULT_OWNER_NAME.to_string(),
            role: DEFAULT_ROLE.to_string(),
            video_list: DEFAULT_VIDEO_LIST.iter().map(|id| id.to_string()).collect(),
        }
    }
}

impl ProfileRecord {
    pub fn visible_videos(&self) -> impl Iterator<Item = &str> {
        self.video_list
            .iter()
            .map(String::as_str)
            .filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
