use std::sync::Arc;

use tracing::info;

use super::dto::LoginResponse;
use super::models::{LoginRequest, VerifyRequest};
use crate::api::error::ServiceError;
use crate::db::Store;
use crate::notify::Mailer;
use crate::otp::issue_otp;

/// OTP login and verification
pub struct AuthService {
    store: Arc<dyn Store>,
    mailer: Option<Mailer>,
}

impl AuthService {
    pub fn new(store: Arc<dyn Store>, mailer: Option<Mailer>) -> Self {
        Self { store, mailer }
    }

    /// Issue a fresh OTP for the account, replacing any previous one
    ///
    /// The email (when configured) goes out in the background after the
    /// account is stored; its outcome never changes the response.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ServiceError> {
        let otp = issue_otp();

        self.store
            .upsert_account(&request.email, request.role.as_deref(), &otp)
            .await?;
        info!("Service: OTP issued for {}", request.email);

        if let Some(mailer) = &self.mailer {
            mailer.dispatch_otp(&request.email, &otp);
        }

        Ok(LoginResponse { otp })
    }

    pub async fn verify(&self, request: &VerifyRequest) -> Result<(), ServiceError> {
        match self.store.find_account(&request.email, &request.otp).await? {
            Some(_) => {
                info!("Service: OTP verified for {}", request.email);
                Ok(())
            }
            None => Err(ServiceError::Unauthorized),
        }
    }
}
