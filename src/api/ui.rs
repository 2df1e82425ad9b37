use actix_web::{HttpResponse, Responder, get, http::header::ContentType, web};

const INDEX_HTML: &str = include_str!("index.html");

/// The single-page frontend, served as-is
#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}

pub fn ui_config(config: &mut web::ServiceConfig) {
    config.service(index);
}
