use serde::{Deserialize, Serialize};

/// Body returned by the contact endpoint for a rejected submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactErrorBody {
    pub error: String,
}

impl ContactErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
