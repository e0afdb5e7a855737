use std::path::Path;
use std::fs;
use anyhow::{Result, Context};
use log::{debug, trace};

/// Create a directory if it doesn't exist
pub fn ensure_dir_exists(dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    if !dir.as_os_str().is_empty() && !dir.exists() {
        debug!("Creating directory: {}", dir.display());
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }
    Ok(())
}

/// Check if a file name ends with `.<extension>`, case-sensitively
pub fn has_extension(path: impl AsRef<Path>, extension: &str) -> bool {
    path.as_ref()
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_suffix(extension))
        .is_some_and(|stem| stem.ends_with('.'))
}

/// Check if a file has one of the specified extensions
pub fn has_any_extension(path: impl AsRef<Path>, extensions: &[String]) -> bool {
    extensions.iter().any(|ext| has_extension(path.as_ref(), ext))
}

/// Read a file that must be valid UTF-8 text
///
/// Read failures and decode failures are reported as distinct errors so that
/// the caller's message names what went wrong with which file.
pub fn read_text_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read file {}", path.display()))?;
    trace!("Read {} bytes from {}", bytes.len(), path.display());

    String::from_utf8(bytes)
        .with_context(|| format!("File {} is not valid UTF-8 text", path.display()))
}

/// Write a string to a file, creating missing parent directories
pub fn write_string_to_file(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write file {}", path.display()))
}
