//! Error types for the dashboard

use thiserror::Error;

/// Main dashboard error type
#[derive(Debug, Error)]
pub enum DashError {
    /// Stored to-do list is present but not a valid JSON array of items
    #[error("stored value under `{key}` is not a valid to-do list: {source}")]
    StorageCorrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Stored to-do list repeats an item id
    #[error("stored value under `{key}` repeats item id {id}")]
    DuplicateId { key: String, id: u64 },

    /// Stored to-do list holds an id outside the representable range
    #[error("stored value under `{key}` has out-of-range item id {id}")]
    IdOutOfRange { key: String, id: u64 },

    /// Serializing the to-do list failed
    #[error("failed to encode to-do list: {0}")]
    Encode(#[source] serde_json::Error),

    /// Embedded dashboard config is malformed
    #[error("invalid dashboard config: {0}")]
    Config(#[source] serde_json::Error),
}

impl DashError {
    /// Whether this error means the persisted list could not be trusted
    pub fn is_corrupt_storage(&self) -> bool {
        matches!(
            self,
            DashError::StorageCorrupt { .. }
                | DashError::DuplicateId { .. }
                | DashError::IdOutOfRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DashError>;
