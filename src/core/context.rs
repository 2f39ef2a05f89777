use crate::core::files::FileSet;

/// The kind of run a task is invoked in, together with the candidate files
/// supplied by the invoker. Only full runs and pre-commit runs carry files a
/// task is allowed to act on.
#[derive(Debug, Clone)]
pub enum TaskContext {
    FullRun(FileSet),
    PreCommit(FileSet),
    Other,
}

impl TaskContext {
    /// The candidate files, or `None` when the context is not one a task may
    /// run in.
    pub fn runnable_files(&self) -> Option<&FileSet> {
        match self {
            TaskContext::FullRun(files) | TaskContext::PreCommit(files) => Some(files),
            TaskContext::Other => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            TaskContext::FullRun(_) => "full-run",
            TaskContext::PreCommit(_) => "pre-commit",
            TaskContext::Other => "other",
        }
    }
}
