pub mod precommit;
pub mod run;

use anyhow::Result;
use clap::Args;

use crate::cli::output::OutputFormatter;
use crate::core::config::SnifferConfig;
use crate::core::context::TaskContext;
use crate::core::runner::TaskRunner;
use crate::formatter::CodeSnifferFormatter;
use crate::process::SystemProcessRunner;
use crate::tasks::traits::Task;
use crate::tasks::CodeSnifferTask;

/// Sniffer options shared by every subcommand; maps one-to-one onto
/// `SnifferConfig`.
#[derive(Args, Debug)]
pub struct SnifferArgs {
    /// Coding standard(s) to check against (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub standard: Vec<String>,

    #[arg(long)]
    pub tab_width: Option<u32>,

    #[arg(long)]
    pub encoding: Option<String>,

    /// Only check files matching one of these patterns
    #[arg(long = "whitelist", value_delimiter = ',')]
    pub whitelist_patterns: Vec<String>,

    /// Skip files matching any of these patterns
    #[arg(long = "ignore", value_delimiter = ',')]
    pub ignore_patterns: Vec<String>,

    /// Restrict the check to these sniff codes (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub sniffs: Vec<String>,

    #[arg(long)]
    pub severity: Option<u32>,

    #[arg(long)]
    pub error_severity: Option<u32>,

    #[arg(long)]
    pub warning_severity: Option<u32>,

    /// File extensions that make a file eligible (comma-separated)
    #[arg(long = "triggered-by", value_delimiter = ',', default_value = "php")]
    pub triggered_by: Vec<String>,

    /// Report format the sniffer should print
    #[arg(long, default_value = "full")]
    pub report: String,

    #[arg(long)]
    pub report_width: Option<u32>,

    /// Sniff codes to exclude (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,
}

impl SnifferArgs {
    pub fn to_config(&self) -> SnifferConfig {
        SnifferConfig {
            standard: self.standard.clone(),
            tab_width: self.tab_width,
            encoding: self.encoding.clone(),
            whitelist_patterns: self.whitelist_patterns.clone(),
            ignore_patterns: self.ignore_patterns.clone(),
            sniffs: self.sniffs.clone(),
            severity: self.severity,
            error_severity: self.error_severity,
            warning_severity: self.warning_severity,
            triggered_by: self.triggered_by.clone(),
            report: self.report.clone(),
            report_width: self.report_width,
            exclude: self.exclude.clone(),
        }
    }
}

/// Run all registered tasks against the context and report. Returns whether
/// every task came back clean.
pub(crate) async fn run_tasks(
    context: &TaskContext,
    sniffer: &SnifferArgs,
    format: &str,
) -> Result<bool> {
    let tasks: Vec<Box<dyn Task>> = vec![Box::new(CodeSnifferTask::new(
        sniffer.to_config(),
        Box::new(SystemProcessRunner::from_env()),
        Box::new(CodeSnifferFormatter),
    ))];
    let runner = TaskRunner::new(tasks);

    let progress = crate::cli::progress::TaskProgress::new();
    let reports = runner
        .run_with_progress(context, |name| progress.set_task(name))
        .await?;
    progress.finish();

    OutputFormatter::new(format).display(context, &reports);

    Ok(reports.iter().all(|report| !report.outcome.is_failure()))
}
