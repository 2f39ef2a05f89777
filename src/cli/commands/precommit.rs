use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::core::context::TaskContext;
use crate::core::files::FileSet;

use super::SnifferArgs;

#[derive(Args, Debug)]
pub struct PreCommitArgs {
    /// Staged files, as passed by the hook script
    pub files: Vec<PathBuf>,

    /// Output format: table or json
    #[arg(long, default_value = "table")]
    pub format: String,

    #[command(flatten)]
    pub sniffer: SnifferArgs,
}

pub async fn execute(args: &PreCommitArgs) -> Result<bool> {
    let context = TaskContext::PreCommit(FileSet::new(args.files.clone()));
    super::run_tasks(&context, &args.sniffer, &args.format).await
}
