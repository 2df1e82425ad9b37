use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::{error, warn};

use crate::api::validation::ErrorResponse;
use crate::db::StoreError;

/// Service-level errors
///
/// Request validation failures never reach here; they are rejected by the
/// JSON extractor (see `validation::json_config`).
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// No account matches the email/otp pair
    #[error("invalid email or otp")]
    Unauthorized,

    /// Persistence operation failed
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Unauthorized => StatusCode::UNAUTHORIZED,
            ServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::Unauthorized => {
                warn!("Rejected OTP verification");
                HttpResponse::Unauthorized().finish()
            }
            ServiceError::Store(e) => {
                error!("Store error: {}", e);
                HttpResponse::InternalServerError().json(ErrorResponse {
                    error: "Failed to process request".to_string(),
                    fields: serde_json::json!({"message": "Database error occurred"}),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn unauthorized_has_empty_body() {
        let resp = ServiceError::Unauthorized.error_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        assert!(bytes.is_empty());
    }

    #[actix_web::test]
    async fn store_error_does_not_leak_details() {
        let err = ServiceError::Store(StoreError::Database(sqlx::Error::PoolClosed));
        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "Failed to process request");
        assert_eq!(json["fields"]["message"], "Database error occurred");
        assert!(!String::from_utf8_lossy(&bytes).contains("pool"));
    }
}
