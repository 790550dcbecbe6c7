use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object not found: {key}")]
    NotFound { key: String },

    #[error("invalid object key: {key}")]
    InvalidKey { key: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("read error: {0}")]
    GetObject(String),

    #[error("write error: {0}")]
    PutObject(String),

    #[error("list error: {0}")]
    ListObjects(String),
}
