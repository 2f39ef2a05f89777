use anyhow::Result;
use serde::Serialize;

use crate::core::context::TaskContext;
use crate::core::outcome::TaskOutcome;
use crate::tasks::traits::Task;

#[derive(Debug, Clone, Serialize)]
pub struct TaskReport {
    pub task: String,
    #[serde(flatten)]
    pub outcome: TaskOutcome,
}

/// Runs registered tasks one after the other against a single context.
pub struct TaskRunner {
    tasks: Vec<Box<dyn Task>>,
}

impl TaskRunner {
    pub fn new(tasks: Vec<Box<dyn Task>>) -> Self {
        Self { tasks }
    }

    pub async fn run(&self, context: &TaskContext) -> Result<Vec<TaskReport>> {
        self.run_with_progress(context, |_| {}).await
    }

    pub async fn run_with_progress<F>(
        &self,
        context: &TaskContext,
        mut on_task: F,
    ) -> Result<Vec<TaskReport>>
    where
        F: FnMut(&str),
    {
        let mut reports = Vec::with_capacity(self.tasks.len());

        for task in &self.tasks {
            on_task(task.name());
            let outcome = task.run(context).await?;
            reports.push(TaskReport {
                task: task.name().to_string(),
                outcome,
            });
        }

        Ok(reports)
    }
}
