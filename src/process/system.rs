use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::process::Command;

use super::{ArgumentList, CommandNotFound, ProcessOutput, ProcessRunner};

/// Locates executables on a search-path list and runs them with captured
/// output. Arguments are passed argv-style; no shell is involved.
pub struct SystemProcessRunner {
    search_paths: Vec<PathBuf>,
}

impl SystemProcessRunner {
    pub fn from_env() -> Self {
        let search_paths = std::env::var_os("PATH")
            .map(|path| std::env::split_paths(&path).collect())
            .unwrap_or_default();
        Self { search_paths }
    }

    pub fn with_search_paths(search_paths: Vec<PathBuf>) -> Self {
        Self { search_paths }
    }

    fn locate(&self, command: &str) -> Option<PathBuf> {
        self.search_paths
            .iter()
            .map(|dir| dir.join(command))
            .find(|candidate| is_executable(candidate))
    }
}

#[async_trait]
impl ProcessRunner for SystemProcessRunner {
    fn build_arguments(&self, command: &str) -> Result<ArgumentList, CommandNotFound> {
        self.locate(command)
            .map(ArgumentList::for_command)
            .ok_or_else(|| CommandNotFound {
                command: command.to_string(),
            })
    }

    async fn execute(&self, arguments: &ArgumentList) -> Result<ProcessOutput> {
        let command_line = arguments.command_line();
        let output = Command::new(arguments.program())
            .args(arguments.args())
            .output()
            .await
            .with_context(|| format!("failed to run `{command_line}`"))?;

        Ok(ProcessOutput {
            command_line,
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
