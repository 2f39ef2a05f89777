use std::path::PathBuf;

use anyhow::{Context, Result};
use regex::Regex;

/// Ordered set of candidate file paths. Filters return new sets and keep the
/// original order, so the argument list handed to the external tool is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    files: Vec<PathBuf>,
}

impl FileSet {
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self { files }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.files
    }

    /// Keep only files whose extension is one of `extensions`.
    pub fn by_extensions(&self, extensions: &[String]) -> FileSet {
        let files = self
            .files
            .iter()
            .filter(|path| {
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| extensions.iter().any(|wanted| wanted == ext))
                    .unwrap_or(false)
            })
            .cloned()
            .collect();
        FileSet { files }
    }

    /// Keep only files whose path matches at least one of the patterns.
    pub fn matching_any(&self, patterns: &[String]) -> Result<FileSet> {
        let patterns = compile(patterns)?;
        let files = self
            .files
            .iter()
            .filter(|path| {
                let rendered = path.to_string_lossy();
                patterns.iter().any(|pattern| pattern.is_match(&rendered))
            })
            .cloned()
            .collect();
        Ok(FileSet { files })
    }

    /// Drop files whose path matches any of the patterns.
    pub fn excluding(&self, patterns: &[String]) -> Result<FileSet> {
        let patterns = compile(patterns)?;
        let files = self
            .files
            .iter()
            .filter(|path| {
                let rendered = path.to_string_lossy();
                !patterns.iter().any(|pattern| pattern.is_match(&rendered))
            })
            .cloned()
            .collect();
        Ok(FileSet { files })
    }
}

fn compile(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern).with_context(|| format!("invalid path pattern `{pattern}`"))
        })
        .collect()
}
