pub mod system;

pub use system::SystemProcessRunner;

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Result;
use async_trait::async_trait;

/// Ordered argument list for one external command invocation. Arguments are
/// discrete argv elements, never shell strings, and the push helpers keep the
/// flag-emission order auditable in one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentList {
    program: PathBuf,
    args: Vec<String>,
}

impl ArgumentList {
    pub fn for_command(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn add(&mut self, argument: impl Into<String>) {
        self.args.push(argument.into());
    }

    /// `--flag=value`, always emitted.
    pub fn add_argument(&mut self, flag: &str, value: &str) {
        self.add(format!("{flag}={value}"));
    }

    /// `--flag=value`, only when the value is set.
    pub fn add_optional_argument(&mut self, flag: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.add_argument(flag, value);
        }
    }

    pub fn add_optional_integer_argument(&mut self, flag: &str, value: Option<u32>) {
        if let Some(value) = value {
            self.add_argument(flag, &value.to_string());
        }
    }

    /// `--flag=a,b,c`, only when the list is non-empty.
    pub fn add_comma_separated_argument(&mut self, flag: &str, values: &[String]) {
        if !values.is_empty() {
            self.add_argument(flag, &values.join(","));
        }
    }

    pub fn add_files(&mut self, files: &[PathBuf]) {
        for file in files {
            self.add(file.to_string_lossy().to_string());
        }
    }

    pub fn command_line(&self) -> String {
        let mut rendered = self.program.to_string_lossy().to_string();
        for arg in &self.args {
            rendered.push(' ');
            rendered.push_str(arg);
        }
        rendered
    }
}

/// Captured result of a finished process.
#[derive(Debug, Clone, Default)]
pub struct ProcessOutput {
    pub command_line: String,
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn is_successful(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// The command could not be located on the search path. Expected and
/// recoverable for optional tooling, which is why it is a distinct type
/// instead of an opaque error.
#[derive(Debug)]
pub struct CommandNotFound {
    pub command: String,
}

impl fmt::Display for CommandNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "command `{}` could not be located on the search path",
            self.command
        )
    }
}

impl std::error::Error for CommandNotFound {}

/// Port for locating and executing external commands. Locating is separate
/// from executing so a missing fixer can be downgraded to an informational
/// note without ever spawning a process.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    fn build_arguments(&self, command: &str) -> Result<ArgumentList, CommandNotFound>;
    async fn execute(&self, arguments: &ArgumentList) -> Result<ProcessOutput>;
}
