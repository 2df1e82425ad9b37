use actix_web::{
    HttpResponse, get, post,
    web::{Data, ServiceConfig, scope},
};
use actix_web_validator::Json;
use tracing::error;

use super::models::CreateJobRequest;
use super::service::JobService;
use crate::api::error::ServiceError;
use crate::db::models::JobRow;

/// The page always expects an array, so failures still answer with `[]`
#[get("")]
async fn list_jobs(service: Data<JobService>) -> HttpResponse {
    match service.list_jobs().await {
        Ok(jobs) => HttpResponse::Ok().json(jobs),
        Err(err) => {
            error!("Failed to list jobs: {}", err);
            HttpResponse::InternalServerError().json(Vec::<JobRow>::new())
        }
    }
}

#[post("")]
async fn create_job(
    service: Data<JobService>,
    request: Json<CreateJobRequest>,
) -> Result<HttpResponse, ServiceError> {
    service.create_job(request.into_inner()).await?;
    Ok(HttpResponse::Ok().finish())
}

pub fn job_config(config: &mut ServiceConfig) {
    config.service(scope("/jobs").service(list_jobs).service(create_job));
}
