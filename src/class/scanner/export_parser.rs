use std::path::Path;
use anyhow::{Result, Context, bail};
use log::{debug, trace};
use regex::Regex;

use crate::utils::file_utils;

/// Extracts the names of classes declared with an export annotation keyword
///
/// A declaration is `class` or `struct`, one or more of the component's
/// keywords, then the class name: `class Q_CORE_EXPORT QChar {`.
#[derive(Debug, Clone)]
pub struct ExportParser {
    regex: Regex,
}

impl ExportParser {
    /// Build a parser for the given keyword alternatives
    pub fn new(keywords: &[&str]) -> Result<Self> {
        if keywords.is_empty() {
            bail!("At least one export keyword is required");
        }

        let alternation = keywords
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(r"\b(?:class|struct)(?:\s+(?:{alternation}))+\s+(\w+)");

        let regex = Regex::new(&pattern)
            .with_context(|| format!("Invalid export pattern for keywords {:?}", keywords))?;

        Ok(Self { regex })
    }

    /// Class names declared in `content`, in order of appearance, duplicates kept
    pub fn parse_content(&self, content: &str) -> Vec<String> {
        self.regex
            .captures_iter(content)
            .map(|cap| cap[1].to_string())
            .collect()
    }

    /// Read a header and return the exported class names it declares
    pub fn parse_file(&self, file_path: impl AsRef<Path>) -> Result<Vec<String>> {
        let file_path = file_path.as_ref();
        trace!("Parsing file: {}", file_path.display());

        let content = file_utils::read_text_file(file_path)?;
        let names = self.parse_content(&content);

        if !names.is_empty() {
            debug!("Found {} exported classes in {}", names.len(), file_path.display());
        }
        Ok(names)
    }
}
