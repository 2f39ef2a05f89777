use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;

use crate::core::config::SnifferConfig;
use crate::core::context::TaskContext;
use crate::core::files::FileSet;
use crate::core::outcome::TaskOutcome;
use crate::formatter::traits::ReportFormatter;
use crate::process::{ArgumentList, ProcessRunner};

use super::traits::Task;

const LINT_COMMAND: &str = "phpcs";
const FIX_COMMAND: &str = "phpcbf";

/// Lints the candidate files with the sniffer and, when violations are
/// auto-fixable, chains the fixer tool to suggest a remediation.
pub struct CodeSnifferTask {
    config: SnifferConfig,
    runner: Box<dyn ProcessRunner>,
    formatter: Box<dyn ReportFormatter>,
}

impl CodeSnifferTask {
    pub fn new(
        config: SnifferConfig,
        runner: Box<dyn ProcessRunner>,
        formatter: Box<dyn ReportFormatter>,
    ) -> Self {
        Self {
            config,
            runner,
            formatter,
        }
    }

    fn candidate_files(&self, files: &FileSet) -> Result<FileSet> {
        let mut files = files.by_extensions(&self.config.triggered_by);
        if !self.config.whitelist_patterns.is_empty() {
            files = files.matching_any(&self.config.whitelist_patterns)?;
        }
        files.excluding(&self.config.ignore_patterns)
    }

    /// Flag order is part of the task's contract; keep every push in this one
    /// place.
    fn build_arguments(&self, files: &FileSet) -> Result<ArgumentList> {
        let mut arguments = self.runner.build_arguments(LINT_COMMAND)?;
        arguments.add_comma_separated_argument("--standard", &self.config.standard);
        arguments.add_comma_separated_argument("--extensions", &self.config.triggered_by);
        arguments.add_optional_integer_argument("--tab-width", self.config.tab_width);
        arguments.add_optional_argument("--encoding", self.config.encoding.as_deref());
        arguments.add_argument("--report", &self.config.report);
        arguments.add_optional_integer_argument("--report-width", self.config.report_width);
        arguments.add_optional_integer_argument("--severity", self.config.severity);
        arguments.add_optional_integer_argument("--error-severity", self.config.error_severity);
        arguments.add_optional_integer_argument("--warning-severity", self.config.warning_severity);
        arguments.add_comma_separated_argument("--sniffs", &self.config.sniffs);
        arguments.add_comma_separated_argument("--ignore", &self.config.ignore_patterns);
        arguments.add_comma_separated_argument("--exclude", &self.config.exclude);
        arguments.add("--report-json");
        arguments.add_files(files.paths());
        Ok(arguments)
    }

    async fn suggest_fix(&self, diagnostic: String, fixable: &[PathBuf]) -> Result<TaskOutcome> {
        // A missing fixer downgrades to an informational note; it is never
        // fatal for the task.
        let mut arguments = match self.runner.build_arguments(FIX_COMMAND) {
            Ok(arguments) => arguments,
            Err(_) => {
                return Ok(TaskOutcome::Failed {
                    message: format!(
                        "{diagnostic}\nInfo: {FIX_COMMAND} could not get found. \
                         Please consider to install it for suggestions."
                    ),
                });
            }
        };

        arguments.add_files(fixable);
        let fixer = self.runner.execute(&arguments).await?;
        if fixer.is_successful() {
            let manual_fix = self.formatter.format_manual_fix(&fixer);
            return Ok(TaskOutcome::FailedWithFixSuggestion {
                message: format!("{diagnostic}{manual_fix}"),
            });
        }

        let detail = if fixer.stderr.is_empty() {
            &fixer.stdout
        } else {
            &fixer.stderr
        };
        Ok(TaskOutcome::Failed {
            message: format!(
                "{diagnostic}\n{FIX_COMMAND} failed while checking the suggested fixes:\n{detail}"
            ),
        })
    }
}

#[async_trait]
impl Task for CodeSnifferTask {
    fn name(&self) -> &'static str {
        "code-sniffer"
    }

    async fn run(&self, context: &TaskContext) -> Result<TaskOutcome> {
        let Some(files) = context.runnable_files() else {
            return Ok(TaskOutcome::Skipped);
        };

        let files = self.candidate_files(files)?;
        if files.is_empty() {
            return Ok(TaskOutcome::Skipped);
        }

        let arguments = self.build_arguments(&files)?;
        let process = self.runner.execute(&arguments).await?;
        if process.is_successful() {
            return Ok(TaskOutcome::Passed);
        }

        let report = self.formatter.format(&process);
        if report.fixable_files.is_empty() {
            return Ok(TaskOutcome::Failed {
                message: report.diagnostic,
            });
        }

        self.suggest_fix(report.diagnostic, &report.fixable_files).await
    }
}
