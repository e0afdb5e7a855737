use std::path::{Path, PathBuf};
use anyhow::{Result, Context};
use log::{debug, info};

use crate::class::types::ClassMap;
use crate::config::ToolConfig;
use crate::utils::{file_utils, hash_utils};

/// State of the generated header compared with a fresh rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// The file on disk matches byte for byte
    UpToDate,

    /// The file on disk differs
    Stale,

    /// There is no file on disk
    Missing,
}

/// Renders the class map as a C++ header and stores it
#[derive(Debug)]
pub struct ClassMapWriter {
    /// Path of the generated header
    output: PathBuf,

    /// Generator named in the banner comment
    generator_name: String,
}

impl ClassMapWriter {
    pub fn new(output: impl AsRef<Path>, generator_name: impl Into<String>) -> Self {
        Self {
            output: output.as_ref().to_path_buf(),
            generator_name: generator_name.into(),
        }
    }

    pub fn from_config(config: &ToolConfig) -> Self {
        Self::new(&config.output, config.generator_name.clone())
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Render the include-guarded table and count constant
    pub fn render(&self, map: &ClassMap) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "// Automatically generated by {}, DO NOT EDIT!\n\n",
            self.generator_name
        ));
        out.push_str("#ifndef QT_CLASS_MAP_H\n#define QT_CLASS_MAP_H\n\n");
        out.push_str("static const ClassInfoEntry qclass_lib_map[] = {\n");

        for entry in map.entries() {
            out.push_str(&format!("    {{ \"{}\", \"{}\"}},\n", entry.name, entry.path));
        }

        out.push_str("};\n");
        out.push_str(&format!("static const int qclass_lib_count = {};\n\n", map.count()));
        out.push_str("#endif\n");
        out
    }

    /// Render the map as pretty-printed JSON
    pub fn render_json(&self, map: &ClassMap) -> Result<String> {
        serde_json::to_string_pretty(map).context("Failed to serialize class map")
    }

    /// Write the rendered header, replacing any previous version
    pub fn write(&self, map: &ClassMap) -> Result<()> {
        info!("-- Writing: {}", self.output.display());

        let content = self.render(map);
        file_utils::write_string_to_file(&self.output, &content)?;

        debug!("Wrote {} entries to {}", map.total_entries(), self.output.display());
        Ok(())
    }

    /// Compare the header on disk with what `write` would produce
    pub fn check(&self, map: &ClassMap) -> Result<CheckStatus> {
        let rendered = hash_utils::hash_string(&self.render(map));

        let status = match hash_utils::hash_existing_file(&self.output)
            .with_context(|| format!("Failed to check {}", self.output.display()))?
        {
            None => CheckStatus::Missing,
            Some(existing) if existing == rendered => CheckStatus::UpToDate,
            Some(_) => CheckStatus::Stale,
        };

        debug!("{} is {:?}", self.output.display(), status);
        Ok(status)
    }
}
