use std::sync::Arc;

use tracing::info;

use super::models::ApplyRequest;
use crate::api::error::ServiceError;
use crate::db::Store;
use crate::db::models::ApplicationRow;

pub struct ApplicationService {
    store: Arc<dyn Store>,
}

impl ApplicationService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn apply(&self, request: ApplyRequest) -> Result<ApplicationRow, ServiceError> {
        let application = self.store.create_application(&request.into()).await?;

        info!(
            "Service: Application {} recorded for job_id={}",
            application.id, application.job_id
        );
        Ok(application)
    }
}
