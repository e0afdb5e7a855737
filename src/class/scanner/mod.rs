mod export_parser;
mod file_collector;

use anyhow::{Result, Context};
use log::debug;

use crate::class::types::{ClassEntry, ClassMap, ClassScanStats, ComponentScan};
use crate::config::{ComponentConfig, ToolConfig};

// Re-export from submodules
pub use export_parser::ExportParser;
pub use file_collector::FileCollector;

/// Scanner collecting exported classes from every configured component
#[derive(Debug)]
pub struct ExportScanner {
    /// Scan configuration
    config: ToolConfig,

    /// File collector for finding headers
    file_collector: FileCollector,
}

impl ExportScanner {
    /// Create a new scanner for the given configuration
    pub fn new(config: ToolConfig) -> Self {
        let file_collector = FileCollector::with_extensions(vec![config.header_extension.clone()])
            .sorted(config.sorted_walk);

        Self {
            config,
            file_collector,
        }
    }

    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    /// Scan one component's headers
    ///
    /// Every match yields one entry, so a class declared in two headers (or
    /// twice in one) appears more than once.
    pub fn scan_component(&self, component: &ComponentConfig) -> Result<ComponentScan> {
        let dir = self.config.component_dir(component);
        let label = component.label(&self.config.product_prefix);
        debug!("Scanning component {} in {}", component.name, dir.display());

        let parser = ExportParser::new(&component.keyword_list())
            .with_context(|| format!("Invalid keywords for component {}", component.name))?;

        let files = self.file_collector.collect_files(&dir)?;

        let mut entries = Vec::new();
        let mut stats = ClassScanStats::default();

        for file in &files {
            let names = parser.parse_file(file)?;
            stats.total_files += 1;

            if names.is_empty() {
                stats.empty_files += 1;
                continue;
            }
            stats.files_with_classes += 1;
            stats.total_classes += names.len();

            let file_name = file
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();

            entries.extend(
                names
                    .into_iter()
                    .map(|name| ClassEntry::new(name, format!("{}/{}", label, file_name))),
            );
        }

        debug!(
            "Component {}: {} classes in {} of {} headers",
            component.name, stats.total_classes, stats.files_with_classes, stats.total_files
        );

        Ok(ComponentScan {
            component: component.name.clone(),
            label,
            entries,
            stats,
        })
    }

    /// Scan every component in configuration order
    pub fn scan_all(&self) -> Result<ClassMap> {
        let components = self
            .config
            .components
            .iter()
            .map(|component| self.scan_component(component))
            .collect::<Result<Vec<_>>>()?;

        let map = ClassMap::new(components, self.config.count_convention);
        let stats = map.stats();
        debug!(
            "Scanned {} headers in {} components, found {} exported classes",
            stats.total_files,
            map.components.len(),
            map.total_entries()
        );

        Ok(map)
    }
}
