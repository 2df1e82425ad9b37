use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /login`
#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "email required"))]
    pub email: String,

    /// "candidate" or "employer" in practice; stored as given
    #[serde(default)]
    pub role: Option<String>,
}

/// Body of `POST /verify`
#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct VerifyRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "email required"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "otp required"))]
    pub otp: String,
}
