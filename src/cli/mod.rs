pub mod commands;
pub mod output;
pub mod progress;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "hookdoctor",
    version,
    about = "Run quality assurance checks from your git hooks"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check every eligible file under the given paths
    Run(commands::run::RunArgs),
    /// Check the staged files handed over by the pre-commit hook
    PreCommit(commands::precommit::PreCommitArgs),
}
