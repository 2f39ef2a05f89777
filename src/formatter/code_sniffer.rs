use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::process::ProcessOutput;

use super::traits::{LintReport, ReportFormatter};

/// Interprets sniffer output produced with both a human report and the
/// trailing machine-readable JSON report on the last line.
pub struct CodeSnifferFormatter;

#[derive(Debug, Deserialize)]
struct JsonReport {
    #[serde(default)]
    files: BTreeMap<String, FileReport>,
}

#[derive(Debug, Deserialize)]
struct FileReport {
    #[serde(default)]
    messages: Vec<Message>,
}

#[derive(Debug, Deserialize)]
struct Message {
    #[serde(default)]
    fixable: bool,
}

impl JsonReport {
    fn suggested_files(&self) -> Vec<PathBuf> {
        self.files
            .iter()
            .filter(|(_, report)| report.messages.iter().any(|message| message.fixable))
            .map(|(path, _)| PathBuf::from(path))
            .collect()
    }
}

impl ReportFormatter for CodeSnifferFormatter {
    fn format(&self, process: &ProcessOutput) -> LintReport {
        let output = process.stdout.trim_end();
        if output.is_empty() {
            return LintReport {
                diagnostic: process.stderr.trim().to_string(),
                fixable_files: Vec::new(),
            };
        }

        let (human, last_line) = match output.rfind('\n') {
            Some(pos) => (&output[..pos], &output[pos + 1..]),
            None => ("", output),
        };

        match serde_json::from_str::<JsonReport>(last_line) {
            Ok(report) => LintReport {
                diagnostic: human.trim().to_string(),
                fixable_files: report.suggested_files(),
            },
            // No JSON trailer, so the whole output is the diagnostic.
            Err(_) => LintReport {
                diagnostic: output.trim().to_string(),
                fixable_files: Vec::new(),
            },
        }
    }

    fn format_manual_fix(&self, fixer: &ProcessOutput) -> String {
        format!(
            "\nYou can fix some of these violations by running the following command:\n{}",
            fixer.command_line
        )
    }
}
