use std::path::{Path, PathBuf};
use std::fs;
use anyhow::{Result, Context, bail};
use log::debug;
use serde::{Serialize, Deserialize};

/// Components scanned when no configuration file replaces the table.
/// Each entry is the component directory name and its export keywords.
const DEFAULT_COMPONENTS: &[(&str, &str)] = &[
    ("core", "Q_CORE_EXPORT"),
    ("gui", "Q_GUI_EXPORT"),
    ("dbus", "Q_DBUS_EXPORT"),
    ("declarative", "Q_DECLARATIVE_EXPORT"),
    (
        "designer",
        "QDESIGNER_COMPONENTS_EXPORT|QDESIGNER_EXTENSION_EXPORT|QT_FORMEDITOR_EXPORT|\
         QT_PROPERTYEDITOR_EXPORT|QT_SIGNALSLOTEDITOR_EXPORT|QT_OBJECTINSPECTOR_EXPORT|\
         QT_WIDGETBOX_EXPORT|QT_BUDDYEDITOR_EXPORT|QT_TABORDEREDITOR_EXPORT|QT_TASKMENU_EXPORT",
    ),
    ("help", "QHELP_EXPORT"),
    ("multimedia", "Q_MULTIMEDIA_EXPORT"),
    ("network", "Q_NETWORK_EXPORT"),
    ("sql", "Q_SQL_EXPORT"),
    ("svg", "Q_SVG_EXPORT"),
    ("xml", "Q_XML_EXPORT"),
    ("xmlpatterns", "Q_XMLPATTERNS_EXPORT"),
    ("script", "Q_SCRIPT_EXPORT"),
    ("scripttools", "Q_SCRIPTTOOLS_EXPORT"),
    ("test", "Q_TESTLIB_EXPORT"),
    ("uitools", "QDESIGNER_UILIB_EXPORT"),
    ("opengl", "Q_OPENGL_EXPORT"),
];

/// How the count constant of the generated table relates to the number of entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountConvention {
    /// Number of entries minus one, the value the lookup code has always been built against
    #[default]
    Legacy,

    /// Number of entries
    Exact,
}

impl CountConvention {
    /// Convert a number of entries into the emitted count constant
    pub fn apply(self, total_entries: usize) -> i64 {
        let total = total_entries as i64;
        match self {
            CountConvention::Legacy => total - 1,
            CountConvention::Exact => total,
        }
    }
}

/// A framework component and the keywords marking its exported classes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentConfig {
    /// Directory name of the component below the source root
    pub name: String,

    /// Export annotation keywords, separated by `|`
    pub keywords: String,
}

impl ComponentConfig {
    pub fn new(name: impl Into<String>, keywords: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.into(),
        }
    }

    /// Individual keywords of the alternation, whitespace trimmed
    pub fn keyword_list(&self) -> Vec<&str> {
        self.keywords
            .split('|')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .collect()
    }

    /// Label used as the first path segment of every entry (`core` -> `QtCore`)
    pub fn label(&self, product_prefix: &str) -> String {
        format!("{}{}", product_prefix, capitalize(&self.name))
    }
}

/// Settings of the forward declaration rewriter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteConfig {
    /// File extensions (without the dot) of the files to rewrite
    pub extensions: Vec<String>,

    /// Replacement for the built-in allow-list, one class name per line
    pub allow_list_file: Option<PathBuf>,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            extensions: ["cpp", "cc", "hpp", "h"].iter().map(|e| e.to_string()).collect(),
            allow_list_file: None,
        }
    }
}

/// Configuration shared by both maintenance passes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Directory holding one subdirectory per component
    pub source_root: PathBuf,

    /// Path of the generated class map header
    pub output: PathBuf,

    /// Prefix of every component label
    pub product_prefix: String,

    /// Generator name written into the banner of the generated file
    pub generator_name: String,

    /// Extension (without the dot) of the headers scanned for exported classes
    pub header_extension: String,

    /// Visit directory entries sorted by name instead of file system order
    pub sorted_walk: bool,

    /// Relation between the emitted count constant and the number of entries
    pub count_convention: CountConvention,

    /// Components in the order they appear in the generated table
    pub components: Vec<ComponentConfig>,

    /// Forward declaration rewriter settings
    pub rewrite: RewriteConfig,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from("src"),
            output: PathBuf::from("src/shared/qclass_lib_map.h"),
            product_prefix: "Qt".to_string(),
            generator_name: "genmap.py".to_string(),
            header_extension: "h".to_string(),
            sorted_walk: true,
            count_convention: CountConvention::Legacy,
            components: DEFAULT_COMPONENTS
                .iter()
                .map(|(name, keywords)| ComponentConfig::new(*name, *keywords))
                .collect(),
            rewrite: RewriteConfig::default(),
        }
    }
}

impl ToolConfig {
    /// Load a configuration file, TOML or YAML depending on its extension
    ///
    /// Each pass validates the settings it uses before touching any file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let config: ToolConfig = match extension.as_str() {
            "toml" => toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML configuration {}", path.display()))?,
            "yaml" | "yml" => serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML configuration {}", path.display()))?,
            other => bail!(
                "Unsupported configuration format '{}' for {} (expected .toml, .yaml or .yml)",
                other,
                path.display()
            ),
        };

        Ok(config)
    }

    /// Load the given file, or fall back to the built-in defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Check the settings of both passes
    pub fn validate(&self) -> Result<()> {
        self.validate_scan()?;
        self.validate_rewrite()
    }

    /// Reject scanner settings that cannot produce a meaningful table
    pub fn validate_scan(&self) -> Result<()> {
        if self.components.is_empty() {
            bail!("Configuration lists no components to scan");
        }

        for component in &self.components {
            if component.name.trim().is_empty() {
                bail!("Component with keywords '{}' has an empty name", component.keywords);
            }

            let keywords = component.keyword_list();
            if keywords.is_empty() {
                bail!("Component '{}' has no export keywords", component.name);
            }

            if let Some(bad) = keywords.iter().find(|k| !is_identifier(k)) {
                bail!(
                    "Export keyword '{}' of component '{}' is not an identifier",
                    bad,
                    component.name
                );
            }
        }

        check_extension(&self.header_extension)
            .context("Invalid header_extension")
    }

    /// Reject rewriter settings that would match no file
    pub fn validate_rewrite(&self) -> Result<()> {
        if self.rewrite.extensions.is_empty() {
            bail!("Rewriter has no file extensions to process");
        }

        for extension in &self.rewrite.extensions {
            check_extension(extension).context("Invalid rewrite.extensions entry")?;
        }
        Ok(())
    }

    /// Root directory of a component's sources
    pub fn component_dir(&self, component: &ComponentConfig) -> PathBuf {
        self.source_root.join(&component.name)
    }
}

/// Upper-case the first character and lower-case the rest
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Extensions are written without the dot, e.g. `h`
fn check_extension(extension: &str) -> Result<()> {
    if extension.is_empty() {
        bail!("File extension must not be empty");
    }
    if extension.starts_with('.') {
        bail!("File extension '{}' must not start with a dot", extension);
    }
    Ok(())
}

fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
