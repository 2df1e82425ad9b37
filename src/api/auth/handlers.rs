use actix_web::{
    HttpResponse, post,
    web::{Data, ServiceConfig},
};
use actix_web_validator::Json;

use super::models::{LoginRequest, VerifyRequest};
use super::service::AuthService;
use crate::api::error::ServiceError;

#[post("/login")]
async fn login(
    service: Data<AuthService>,
    request: Json<LoginRequest>,
) -> Result<HttpResponse, ServiceError> {
    let response = service.login(&request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/verify")]
async fn verify(
    service: Data<AuthService>,
    request: Json<VerifyRequest>,
) -> Result<HttpResponse, ServiceError> {
    service.verify(&request.into_inner()).await?;
    Ok(HttpResponse::Ok().finish())
}

pub fn auth_config(config: &mut ServiceConfig) {
    config.service(login).service(verify);
}
