use serde::Serialize;

/// Result of a single task invocation. Outcomes are returned, never thrown;
/// the diagnostic text is surfaced to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum TaskOutcome {
    /// The context was not runnable or no candidate files survived filtering.
    Skipped,
    Passed,
    Failed { message: String },
    /// Violations were found and the fixer tool can correct some of them.
    FailedWithFixSuggestion { message: String },
}

impl TaskOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            TaskOutcome::Failed { .. } | TaskOutcome::FailedWithFixSuggestion { .. }
        )
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            TaskOutcome::Failed { message } | TaskOutcome::FailedWithFixSuggestion { message } => {
                Some(message)
            }
            _ => None,
        }
    }
}
