//! Store errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to serialize teams: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("storage backend unavailable: {0}")]
    Unavailable(String),

    #[error("storage write rejected for key {key}: {reason}")]
    WriteRejected { key: String, reason: String },
}

pub type StoreResult<T> = Result<T, StoreError>;
