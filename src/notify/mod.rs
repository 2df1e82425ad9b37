pub mod sendgrid;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

pub use sendgrid::SendGridNotifier;

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("email transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("email provider rejected message with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// A single outbound email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl EmailMessage {
    /// The login passcode email
    pub fn otp(to: &str, from: &str, otp: &str) -> Self {
        Self {
            to: to.to_string(),
            from: from.to_string(),
            subject: "Your CareerBridge OTP".to_string(),
            text: format!("Your OTP is {}", otp),
            html: format!("<p>Your OTP is <strong>{}</strong></p>", otp),
        }
    }
}

/// Outbound email delivery
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<(), NotificationError>;
}

/// Configured notifier plus the address it sends from
#[derive(Clone)]
pub struct Mailer {
    notifier: Arc<dyn Notifier>,
    from: String,
}

impl Mailer {
    pub fn new(notifier: Arc<dyn Notifier>, from: impl Into<String>) -> Self {
        Self {
            notifier,
            from: from.into(),
        }
    }

    /// Send the OTP in the background
    ///
    /// The request never waits on the provider; failures are only logged.
    pub fn dispatch_otp(&self, to: &str, otp: &str) {
        let message = EmailMessage::otp(to, &self.from, otp);
        let notifier = self.notifier.clone();

        tokio::spawn(async move {
            match notifier.send(&message).await {
                Ok(()) => info!("OTP email sent to {}", message.to),
                Err(e) => error!("Failed to send OTP email to {}: {}", message.to, e),
            }
        });
    }
}
