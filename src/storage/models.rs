//! Storage record models for the persistence layer.

use serde::{Deserialize, Serialize};

/// One stored preference value with the time it was last written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceRecord {
    pub value: bool,

    /// Unix timestamp of the last write.
    pub updated_at: i64,
}

impl PreferenceRecord {
    /// Creates a record stamped with the current time.
    #[must_use]
    pub fn new(value: bool) -> Self {
        Self {
            value,
            updated_at: chrono::Utc::now().timestamp(),
        }
    }
}
