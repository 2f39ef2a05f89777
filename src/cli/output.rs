use colored::Colorize;

use crate::core::context::TaskContext;
use crate::core::outcome::TaskOutcome;
use crate::core::runner::TaskReport;

pub struct OutputFormatter {
    format: String,
}

impl OutputFormatter {
    pub fn new(format: &str) -> Self {
        Self {
            format: format.to_string(),
        }
    }

    pub fn display(&self, context: &TaskContext, reports: &[TaskReport]) {
        match self.format.as_str() {
            "json" => println!("{}", render_json(context, reports)),
            _ => self.display_table(context, reports),
        }
    }

    fn display_table(&self, context: &TaskContext, reports: &[TaskReport]) {
        println!();
        println!("{} ({})", "HookDoctor".bold(), context.kind());
        println!("{}", "─".repeat(64));

        for report in reports {
            match &report.outcome {
                TaskOutcome::Passed => {
                    println!("  {}  {}", "PASS".green().bold(), report.task);
                }
                TaskOutcome::Skipped => {
                    println!("  {}  {}", "SKIP".yellow(), report.task.dimmed());
                }
                TaskOutcome::Failed { message } => {
                    println!("  {}  {}", "FAIL".red().bold(), report.task);
                    print_message(message);
                }
                TaskOutcome::FailedWithFixSuggestion { message } => {
                    println!(
                        "  {}  {} {}",
                        "FAIL".red().bold(),
                        report.task,
                        "(fixable)".cyan()
                    );
                    print_message(message);
                }
            }
        }

        println!("{}", "─".repeat(64));
        let failures = reports.iter().filter(|r| r.outcome.is_failure()).count();
        if failures == 0 {
            println!("  {}", "All checks passed.".green());
        } else {
            println!("  {} check(s) failed.", failures.to_string().red().bold());
        }
        println!();
    }
}

fn print_message(message: &str) {
    for line in message.lines() {
        println!("         {}", line);
    }
}

fn render_json(context: &TaskContext, reports: &[TaskReport]) -> String {
    let payload = serde_json::json!({
        "context": context.kind(),
        "tasks": reports,
        "failures": reports.iter().filter(|r| r.outcome.is_failure()).count(),
    });
    serde_json::to_string_pretty(&payload).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::files::FileSet;

    #[test]
    fn test_json_rendering_includes_context_and_outcomes() {
        let context = TaskContext::PreCommit(FileSet::default());
        let reports = vec![
            TaskReport {
                task: "code-sniffer".to_string(),
                outcome: TaskOutcome::Failed {
                    message: "nope".to_string(),
                },
            },
            TaskReport {
                task: "other".to_string(),
                outcome: TaskOutcome::Passed,
            },
        ];

        let rendered = render_json(&context, &reports);
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["context"], "pre-commit");
        assert_eq!(value["failures"], 1);
        assert_eq!(value["tasks"][0]["status"], "failed");
        assert_eq!(value["tasks"][1]["status"], "passed");
    }
}
