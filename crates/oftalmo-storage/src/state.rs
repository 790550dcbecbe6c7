use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::objects;

/// Load a JSON object and deserialize it.
pub async fn load_json<T: DeserializeOwned>(root: &Path, key: &str) -> Result<T, StorageError> {
    let output = objects::get_object(root, key).await?;
    let value: T = serde_json::from_slice(&output.body)?;
    Ok(value)
}

/// Serialize `value` as pretty JSON and store it under `key`.
pub async fn save_json<T: Serialize>(
    root: &Path,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    objects::put_object(root, key, body).await
}

/// Load every object under `prefix`.
///
/// Objects that fail to deserialize are logged and skipped so one corrupt
/// file does not hide the rest.
pub async fn load_all<T: DeserializeOwned>(
    root: &Path,
    prefix: &str,
) -> Result<Vec<T>, StorageError> {
    let keys = objects::list_objects(root, prefix).await?;
    let mut values = Vec::with_capacity(keys.len());
    for key in &keys {
        match load_json(root, key).await {
            Ok(value) => values.push(value),
            Err(StorageError::Serialization(e)) => {
                tracing::warn!(key = %key, error = %e, "skipping unreadable record");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(values)
}
