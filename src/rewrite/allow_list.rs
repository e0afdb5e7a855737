use std::collections::HashSet;
use std::path::Path;
use anyhow::Result;
use log::debug;
use once_cell::sync::Lazy;

use crate::utils::file_utils;

static BUILTIN: Lazy<AllowList> =
    Lazy::new(|| AllowList::parse(include_str!("../../data/allow_list.txt")));

/// Class names whose forward declarations may be replaced by an include
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    names: Vec<String>,
}

impl AllowList {
    /// The list of public framework classes shipped with the tool
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Parse one name per line; blank lines and `#` comments are skipped
    pub fn parse(text: &str) -> Self {
        Self::from_names(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Build a list from names, dropping repeats but keeping first-seen order
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let names = names
            .into_iter()
            .map(Into::into)
            .filter(|name: &String| seen.insert(name.clone()))
            .collect();
        Self { names }
    }

    /// Load a list from a text file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let list = Self::parse(&file_utils::read_text_file(path)?);
        debug!("Loaded {} allow-listed classes from {}", list.len(), path.display());
        Ok(list)
    }

    /// Load `path` if given, else the built-in list
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::builtin()),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
