use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use walkdir::WalkDir;

use crate::core::context::TaskContext;
use crate::core::files::FileSet;

use super::SnifferArgs;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Paths to collect candidate files from (defaults to current directory)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Output format: table or json
    #[arg(long, default_value = "table")]
    pub format: String,

    #[command(flatten)]
    pub sniffer: SnifferArgs,
}

pub async fn execute(args: &RunArgs) -> Result<bool> {
    let files = collect_files(&args.paths)?;
    let context = TaskContext::FullRun(FileSet::new(files));
    super::run_tasks(&context, &args.sniffer, &args.format).await
}

/// Walk the given paths and collect regular files, skipping hidden entries
/// such as `.git`. The extension filter belongs to the task, not here.
fn collect_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        for entry in WalkDir::new(path)
            .into_iter()
            .filter_entry(|entry| !is_hidden(entry))
        {
            let entry = entry?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
    }

    files.sort();
    Ok(files)
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|name| name.starts_with('.'))
            .unwrap_or(false)
}
