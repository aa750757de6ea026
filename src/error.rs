//! Error types for the persistence layer

/// Failure raised by a [`KeyValueStore`](crate::progress::KeyValueStore) backend.
///
/// The progress store never hands these to its callers; it logs them and
/// falls back to defaults or the session overlay.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage quota exceeded writing '{key}': {needed} bytes needed, limit is {limit}")]
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
    },

    #[error("Failed to acquire store lock: {0}")]
    Lock(String),
}
