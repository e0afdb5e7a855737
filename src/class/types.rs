use serde::{Serialize, Deserialize};

use crate::config::CountConvention;

/// An exported class and the header declaring it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassEntry {
    /// Name of the class or struct
    pub name: String,

    /// Header path as `<label>/<file name>`, e.g. `QtCore/qchar.h`
    pub path: String,
}

impl ClassEntry {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Statistics about the class scanning process
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassScanStats {
    /// Total number of headers read
    pub total_files: usize,

    /// Total number of exported classes found
    pub total_classes: usize,

    /// Number of headers without any exported class
    pub empty_files: usize,

    /// Number of headers containing exported classes
    pub files_with_classes: usize,
}

impl ClassScanStats {
    /// Merge another stats instance into this one
    pub fn merge(&mut self, other: &Self) {
        self.total_files += other.total_files;
        self.total_classes += other.total_classes;
        self.empty_files += other.empty_files;
        self.files_with_classes += other.files_with_classes;
    }
}

/// Entries found for a single component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentScan {
    /// Component directory name
    pub component: String,

    /// Label prefixed to every entry path
    pub label: String,

    /// Entries in the order they were found
    pub entries: Vec<ClassEntry>,

    pub stats: ClassScanStats,
}

/// The complete class map: every component's entries plus the count constant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassMap {
    /// Per-component results in configuration order
    pub components: Vec<ComponentScan>,

    /// How `count()` is derived from the number of entries
    pub count_convention: CountConvention,
}

impl ClassMap {
    pub fn new(components: Vec<ComponentScan>, count_convention: CountConvention) -> Self {
        Self {
            components,
            count_convention,
        }
    }

    /// All entries, component by component, in discovery order
    pub fn entries(&self) -> impl Iterator<Item = &ClassEntry> {
        self.components.iter().flat_map(|c| c.entries.iter())
    }

    /// Number of entries across all components
    pub fn total_entries(&self) -> usize {
        self.components.iter().map(|c| c.entries.len()).sum()
    }

    /// Value of the emitted count constant
    pub fn count(&self) -> i64 {
        self.count_convention.apply(self.total_entries())
    }

    /// Statistics summed over all components
    pub fn stats(&self) -> ClassScanStats {
        let mut stats = ClassScanStats::default();
        for component in &self.components {
            stats.merge(&component.stats);
        }
        stats
    }
}
