use actix_web::{HttpResponse, error::InternalError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub fields: serde_json::Value,
}

fn bad_request(error: &str, fields: serde_json::Value) -> actix_web::Error {
    let body = ErrorResponse {
        error: error.to_string(),
        fields,
    };
    InternalError::from_response("", HttpResponse::BadRequest().json(body)).into()
}

/// JSON extractor config: bodies up to `limit` bytes, and every rejected body
/// becomes a 400 with an `ErrorResponse`
///
/// Presence checks live on the request types as `validator` rules, so a missing
/// field and an empty one are reported the same way.
pub fn json_config(limit: usize) -> actix_web_validator::JsonConfig {
    actix_web_validator::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| match err {
            actix_web_validator::Error::Validate(validation_errors) => {
                let mut fields = serde_json::Map::new();
                for (field, errors) in validation_errors.field_errors() {
                    let messages: Vec<String> = errors
                        .iter()
                        .map(|e| {
                            e.message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| format!("{} is invalid", field))
                        })
                        .collect();
                    fields.insert(field.to_string(), serde_json::json!({"errors": messages}));
                }
                bad_request("Validation failed", serde_json::Value::Object(fields))
            }
            actix_web_validator::Error::Deserialize(de_err) => {
                let message = if de_err.to_string().contains("EOF while parsing") {
                    "Request body is empty. Expected JSON payload"
                } else {
                    "Invalid JSON format"
                };
                bad_request(
                    "Request validation failed",
                    serde_json::json!({"message": message}),
                )
            }
            other => bad_request(
                "Request validation failed",
                serde_json::json!({"message": other.to_string()}),
            ),
        })
}
