use async_trait::async_trait;

use crate::job::JobDescriptor;

use super::Result;

#[async_trait]
pub trait PipelineInvoker: Send + Sync {
    async fn submit(&self, job: &JobDescriptor) -> Result<String>;
}
