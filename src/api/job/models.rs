use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::db::models::NewJob;

/// Body of `POST /jobs`; only the title is required
#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct CreateJobRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "title required"))]
    pub title: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub description: String,
}

impl From<CreateJobRequest> for NewJob {
    fn from(request: CreateJobRequest) -> Self {
        NewJob {
            title: request.title,
            category: request.category,
            description: request.description,
        }
    }
}
