use std::path::PathBuf;
use serde::{Serialize, Deserialize};

/// A forward declaration replaced by an include
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    /// File the declaration was found in
    pub file: PathBuf,

    /// Class named by the declaration
    pub class_name: String,

    /// Declaration text as it appeared in the file
    pub declaration: String,
}

/// Statistics about a rewrite pass
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteStats {
    /// Number of source files read
    pub files_scanned: usize,

    /// Number of files containing at least one replaced declaration
    pub files_rewritten: usize,

    /// Every replacement, in file and then position order
    pub replacements: Vec<Replacement>,
}
