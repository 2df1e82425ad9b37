use serde::{Deserialize, Serialize};

/// Response for a login request
///
/// The code is returned even when it was also emailed.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub otp: String,
}
