use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use crate::error::StorageError;

/// Suffix for in-flight writes. Never returned by [`list_objects`].
const TMP_SUFFIX: &str = ".tmp";

/// Result of a GET operation.
pub struct GetObjectOutput {
    pub body: Vec<u8>,
}

/// Resolve `key` under `root`, refusing anything that could escape it.
fn object_path(root: &Path, key: &str) -> Result<PathBuf, StorageError> {
    let relative = Path::new(key);
    let safe = !key.is_empty()
        && relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
    if !safe {
        return Err(StorageError::InvalidKey {
            key: key.to_string(),
        });
    }
    Ok(root.join(relative))
}

/// Read an object.
pub async fn get_object(root: &Path, key: &str) -> Result<GetObjectOutput, StorageError> {
    let path = object_path(root, key)?;
    let body = tokio::fs::read(&path).await.map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            StorageError::NotFound {
                key: key.to_string(),
            }
        } else {
            StorageError::GetObject(format!("{key}: {e}"))
        }
    })?;

    Ok(GetObjectOutput { body })
}

/// Write an object, replacing any previous version.
///
/// The body goes to a sibling temp file that is then renamed over the
/// target, so readers never observe a partial object.
pub async fn put_object(root: &Path, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
    let path = object_path(root, key)?;
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| StorageError::PutObject(format!("{key}: {e}")))?;
    }

    let mut tmp_path = path.clone().into_os_string();
    tmp_path.push(TMP_SUFFIX);
    let tmp_path = PathBuf::from(tmp_path);

    tokio::fs::write(&tmp_path, &body)
        .await
        .map_err(|e| StorageError::PutObject(format!("{key}: {e}")))?;
    tokio::fs::rename(&tmp_path, &path)
        .await
        .map_err(|e| StorageError::PutObject(format!("{key}: {e}")))?;

    tracing::debug!(key, bytes = body.len(), "object written");
    Ok(())
}

/// List keys directly under `prefix` (a directory-style prefix such as
/// `"patients/"`), sorted. A prefix with no objects yields an empty list.
pub async fn list_objects(root: &Path, prefix: &str) -> Result<Vec<String>, StorageError> {
    let dir_key = prefix.trim_end_matches('/');
    let dir = object_path(root, dir_key)?;

    let mut entries = match tokio::fs::read_dir(&dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(StorageError::ListObjects(format!("{prefix}: {e}"))),
    };

    let mut keys = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| StorageError::ListObjects(format!("{prefix}: {e}")))?
    {
        let is_file = entry
            .file_type()
            .await
            .map(|t| t.is_file())
            .unwrap_or(false);
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if is_file && !name.ends_with(TMP_SUFFIX) {
            keys.push(format!("{dir_key}/{name}"));
        }
    }

    keys.sort();
    Ok(keys)
}
