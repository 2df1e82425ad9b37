use actix_web::{HttpResponse, Responder, get, web};
use serde::Serialize;
use tracing::error;

use crate::db::Store;

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    database: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
}

/// Store round trip shared by `/health` and `/ready`
async fn store_probe(store: &dyn Store, up: &'static str, down: &'static str) -> HttpResponse {
    match store.ping().await {
        Ok(()) => HttpResponse::Ok().json(HealthResponse {
            status: up,
            database: "connected",
            error: None,
        }),
        Err(e) => {
            error!("Store probe failed: {}", e);
            HttpResponse::ServiceUnavailable().json(HealthResponse {
                status: down,
                database: "disconnected",
                error: Some("Database unavailable"),
            })
        }
    }
}

/// General health check including database connectivity.
#[get("/health")]
async fn health_check(store: web::Data<dyn Store>) -> impl Responder {
    store_probe(store.get_ref(), "healthy", "unhealthy").await
}

/// Readiness check: 503 while the store is unreachable.
#[get("/ready")]
async fn readiness_check(store: web::Data<dyn Store>) -> impl Responder {
    store_probe(store.get_ref(), "ready", "not_ready").await
}

/// Liveness check. Does not touch the store.
#[get("/live")]
async fn liveness_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "alive",
        database: "not_checked",
        error: None,
    })
}

pub fn health_config(config: &mut web::ServiceConfig) {
    config
        .service(health_check)
        .service(readiness_check)
        .service(liveness_check);
}
