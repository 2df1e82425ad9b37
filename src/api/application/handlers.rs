use actix_web::{
    HttpResponse, post,
    web::{Data, ServiceConfig},
};
use actix_web_validator::Json;

use super::models::ApplyRequest;
use super::service::ApplicationService;
use crate::api::error::ServiceError;

#[post("/apply")]
async fn apply(
    service: Data<ApplicationService>,
    request: Json<ApplyRequest>,
) -> Result<HttpResponse, ServiceError> {
    service.apply(request.into_inner()).await?;
    Ok(HttpResponse::Ok().finish())
}

pub fn application_config(config: &mut ServiceConfig) {
    config.service(apply);
}
