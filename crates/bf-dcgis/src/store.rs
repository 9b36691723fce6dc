use std::io::ErrorKind;
use std::path::Path;

use thiserror::Error;

use crate::shops::Feature;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read cache file: {0}")]
    ReadError(std::io::Error),
    #[error("failed to parse cache file: {0}")]
    ParseError(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("failed to write cache file: {0}")]
    WriteError(std::io::Error),
    #[error("failed to serialize cache contents: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Read the cached feature snapshot. A missing file is a normal state (the
/// cache has simply never been written) and yields an empty collection;
/// unreadable or malformed content is an explicit error for the caller to
/// absorb.
pub async fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Feature>, LoadError> {
    let contents = match tokio::fs::read_to_string(&path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(LoadError::ReadError(e)),
    };
    let features: Vec<Feature> = serde_json::from_str(&contents)?;
    Ok(features)
}

/// Replace the cache file with the given snapshot, pretty-printed, creating
/// the containing directory on first write. The write is not atomic; a
/// crash mid-write can leave a truncated file behind.
pub async fn save<P: AsRef<Path>>(path: P, features: &[Feature]) -> Result<(), SaveError> {
    let serialized = serde_json::to_string_pretty(features)?;
    if let Some(parent) = path.as_ref().parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(SaveError::WriteError)?;
    }
    tokio::fs::write(path, serialized)
        .await
        .map_err(SaveError::WriteError)?;
    Ok(())
}
