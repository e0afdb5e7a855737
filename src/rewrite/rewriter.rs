use std::borrow::Cow;
use std::path::Path;
use anyhow::{Result, Context, bail};
use log::{debug, info};
use regex::{Captures, Regex};

use crate::class::scanner::FileCollector;
use crate::utils::file_utils;
use super::allow_list::AllowList;
use super::types::{Replacement, RewriteStats};

/// Replaces forward declarations of allow-listed classes with includes
///
/// `class QWidget;`, `struct QEvent;` and `template <typename T> class QList;`
/// become `#include <QWidget>`, `#include <QEvent>` and `#include <QList>`.
/// All declarations of a file are located in its original text and the file
/// is written once.
#[derive(Debug)]
pub struct ForwardDeclRewriter {
    /// Matches a declaration; group 1 is the class name
    regex: Regex,

    /// File collector for finding sources and headers
    file_collector: FileCollector,

    /// Report replacements without touching any file
    dry_run: bool,
}

impl ForwardDeclRewriter {
    /// Create a rewriter for the given class names and file extensions
    pub fn new(allow_list: &AllowList, extensions: Vec<String>) -> Result<Self> {
        if allow_list.is_empty() {
            bail!("Allow-list is empty, nothing to rewrite");
        }

        let alternation = allow_list
            .names()
            .iter()
            .map(|name| regex::escape(name))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(r"(?:class|struct|template.*) ({alternation});");

        let regex = Regex::new(&pattern)
            .context("Failed to compile forward declaration pattern")?;

        Ok(Self {
            regex,
            file_collector: FileCollector::with_extensions(extensions),
            dry_run: false,
        })
    }

    /// Only report what would be replaced
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Visit directory entries in name order or raw file system order
    pub fn sorted(mut self, sorted: bool) -> Self {
        self.file_collector = self.file_collector.sorted(sorted);
        self
    }

    /// Rewrite `content`, returning the new text and each `(class, declaration)` replaced
    pub fn rewrite_content<'a>(&self, content: &'a str) -> (Cow<'a, str>, Vec<(String, String)>) {
        let mut replaced = Vec::new();

        let rewritten = self.regex.replace_all(content, |caps: &Captures| {
            let class_name = caps[1].to_string();
            let include = format!("#include <{}>", class_name);
            replaced.push((class_name, caps[0].to_string()));
            include
        });

        (rewritten, replaced)
    }

    /// Rewrite a single file in place, returning the replacements made
    pub fn rewrite_file(&self, path: impl AsRef<Path>) -> Result<Vec<Replacement>> {
        let path = path.as_ref();
        let content = file_utils::read_text_file(path)?;

        let (rewritten, replaced) = self.rewrite_content(&content);
        if replaced.is_empty() {
            return Ok(Vec::new());
        }

        let replacements: Vec<Replacement> = replaced
            .into_iter()
            .map(|(class_name, declaration)| {
                info!(
                    "replacing forward declaration of {} with inclusion in: {}",
                    class_name,
                    path.display()
                );
                Replacement {
                    file: path.to_path_buf(),
                    class_name,
                    declaration,
                }
            })
            .collect();

        if self.dry_run {
            debug!("Dry run, leaving {} unchanged", path.display());
        } else {
            file_utils::write_string_to_file(path, &rewritten)?;
        }

        Ok(replacements)
    }

    /// Rewrite every matching file below `root`
    ///
    /// The first read or write failure stops the pass; files rewritten
    /// before it keep their new contents.
    pub fn rewrite_tree(&self, root: impl AsRef<Path>) -> Result<RewriteStats> {
        let root = root.as_ref();
        let files = self.file_collector.collect_files(root)?;
        debug!("Checking {} files below {}", files.len(), root.display());

        let mut stats = RewriteStats::default();
        for file in &files {
            let replacements = self.rewrite_file(file)?;
            stats.files_scanned += 1;
            if !replacements.is_empty() {
                stats.files_rewritten += 1;
                stats.replacements.extend(replacements);
            }
        }

        info!(
            "{} {} forward declarations in {} of {} files",
            if self.dry_run { "Would replace" } else { "Replaced" },
            stats.replacements.len(),
            stats.files_rewritten,
            stats.files_scanned
        );
        Ok(stats)
    }
}
