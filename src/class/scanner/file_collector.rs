use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use anyhow::{Result, Context};
use log::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use crate::utils::file_utils;

/// File collector for finding headers and sources below a directory
#[derive(Debug, Clone)]
pub struct FileCollector {
    /// Valid file extensions to collect
    valid_extensions: Vec<String>,

    /// Whether directory entries are visited in name order
    sorted: bool,
}

impl Default for FileCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl FileCollector {
    /// Create a collector for C/C++ headers, visiting entries in name order
    pub fn new() -> Self {
        Self::with_extensions(vec!["h".to_string()])
    }

    /// Create a new file collector with custom file extensions
    pub fn with_extensions(extensions: Vec<String>) -> Self {
        Self {
            valid_extensions: extensions,
            sorted: true,
        }
    }

    /// Visit entries in name order (`true`) or in raw file system order (`false`)
    pub fn sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// Collect all files with valid extensions from the input directory
    ///
    /// Within each directory the files are listed before any subdirectory is
    /// descended into. Any error while walking, including a missing input
    /// directory, aborts the collection.
    pub fn collect_files(&self, input_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let input_dir = input_dir.as_ref();
        debug!("Collecting files from directory: {}", input_dir.display());

        let walker = WalkDir::new(input_dir).follow_links(false);
        let walker = if self.sorted {
            walker.sort_by(files_first_by_name)
        } else {
            // Stable, so file system order is kept among files and among directories
            walker.sort_by(files_first)
        };

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry
                .with_context(|| format!("Failed to walk directory {}", input_dir.display()))?;

            // Symlinked files are read through their target, like regular files
            if entry.file_type().is_dir() {
                continue;
            }

            if file_utils::has_any_extension(entry.path(), &self.valid_extensions) {
                trace!("Found file: {}", entry.path().display());
                files.push(entry.into_path());
            }
        }

        debug!("Collected {} files for processing", files.len());
        Ok(files)
    }

    /// Get the list of valid file extensions
    pub fn extensions(&self) -> &[String] {
        &self.valid_extensions
    }
}

fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type().is_dir().cmp(&b.file_type().is_dir())
}

fn files_first_by_name(a: &DirEntry, b: &DirEntry) -> Ordering {
    files_first(a, b).then_with(|| a.file_name().cmp(b.file_name()))
}
