use std::path::Path;
use std::fs;
use anyhow::{Result, Context};
use sha2::{Sha256, Digest};
use log::trace;

/// Calculate SHA-256 hash of a string
pub fn hash_string(content: &str) -> String {
    hash_bytes(content.as_bytes())
}

/// Calculate SHA-256 hash of raw bytes
pub fn hash_bytes(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}

/// Calculate SHA-256 hash of a file, or `None` if it does not exist
pub fn hash_existing_file(path: impl AsRef<Path>) -> Result<Option<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }

    trace!("Calculating hash for file: {}", path.display());
    let content = fs::read(path)
        .with_context(|| format!("Failed to read file {}", path.display()))?;
    Ok(Some(hash_bytes(&content)))
}
