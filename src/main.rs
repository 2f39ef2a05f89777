mod cli;
mod core;
mod formatter;
mod process;
mod tasks;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let clean = match &cli.command {
        Commands::Run(args) => cli::commands::run::execute(args).await?,
        Commands::PreCommit(args) => cli::commands::precommit::execute(args).await?,
    };

    if !clean {
        std::process::exit(1);
    }

    Ok(())
}
