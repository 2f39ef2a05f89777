use serde::{Deserialize, Serialize};

/// Options for the code sniffer task. Every field has a documented default,
/// so a task registered without overrides is immediately usable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnifferConfig {
    /// Coding standard(s) passed as `--standard`.
    pub standard: Vec<String>,
    pub tab_width: Option<u32>,
    pub encoding: Option<String>,
    /// When non-empty, only files matching at least one pattern are checked.
    pub whitelist_patterns: Vec<String>,
    /// Files matching any pattern are dropped before invocation; the same
    /// patterns are also forwarded to the sniffer as `--ignore`.
    pub ignore_patterns: Vec<String>,
    pub sniffs: Vec<String>,
    pub severity: Option<u32>,
    pub error_severity: Option<u32>,
    pub warning_severity: Option<u32>,
    /// File extensions that make a file eligible for this task.
    pub triggered_by: Vec<String>,
    pub report: String,
    pub report_width: Option<u32>,
    pub exclude: Vec<String>,
}

impl Default for SnifferConfig {
    fn default() -> Self {
        Self {
            standard: Vec::new(),
            tab_width: None,
            encoding: None,
            whitelist_patterns: Vec::new(),
            ignore_patterns: Vec::new(),
            sniffs: Vec::new(),
            severity: None,
            error_severity: None,
            warning_severity: None,
            triggered_by: vec!["php".to_string()],
            report: "full".to_string(),
            report_width: None,
            exclude: Vec::new(),
        }
    }
}
