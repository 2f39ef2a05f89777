use std::path::PathBuf;

use crate::process::ProcessOutput;

/// A parsed lint run: the human-readable diagnostic plus the files the tool
/// claims it can fix automatically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    pub diagnostic: String,
    pub fixable_files: Vec<PathBuf>,
}

pub trait ReportFormatter: Send + Sync {
    fn format(&self, process: &ProcessOutput) -> LintReport;

    /// Render the "run this yourself" hint for a completed fixer process.
    fn format_manual_fix(&self, fixer: &ProcessOutput) -> String;
}
