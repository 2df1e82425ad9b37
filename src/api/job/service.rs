use std::sync::Arc;

use tracing::info;

use super::models::CreateJobRequest;
use crate::api::error::ServiceError;
use crate::db::Store;
use crate::db::models::JobRow;

/// Job service containing business logic
pub struct JobService {
    store: Arc<dyn Store>,
}

impl JobService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Every job, newest first
    pub async fn list_jobs(&self) -> Result<Vec<JobRow>, ServiceError> {
        Ok(self.store.list_jobs().await?)
    }

    pub async fn create_job(&self, request: CreateJobRequest) -> Result<JobRow, ServiceError> {
        info!("Service: Creating job with title={}", request.title);

        let job = self.store.create_job(&request.into()).await?;

        info!("Service: Job created successfully with id={}", job.id);
        Ok(job)
    }
}
