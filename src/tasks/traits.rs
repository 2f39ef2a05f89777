use anyhow::Result;
use async_trait::async_trait;

use crate::core::context::TaskContext;
use crate::core::outcome::TaskOutcome;

#[async_trait]
pub trait Task: Send + Sync {
    fn name(&self) -> &'static str;
    async fn run(&self, context: &TaskContext) -> Result<TaskOutcome>;
}
