//! Outbound mail for password-reset links.
//!
//! SMTP is optional: when no relay is configured the mailer logs the reset URL
//! instead of sending, which keeps local development working without a mail
//! server. Send failures are logged and swallowed so the reset endpoint's
//! response stays neutral regardless of mail delivery.

use lettre::{
    message::header::ContentType, transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::server::{config::Config, error::AppError};

#[derive(Clone)]
pub struct Mailer {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    from: String,
}

impl Mailer {
    /// Builds the mailer from configuration; without SMTP settings the mailer
    /// runs in log-only mode.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let transport = match &config.smtp {
            Some(smtp) => {
                let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp.host)
                    .map_err(|e| {
                        AppError::InternalError(format!("Invalid SMTP configuration: {e}"))
                    })?
                    .port(smtp.port)
                    .credentials(Credentials::new(
                        smtp.username.clone(),
                        smtp.password.clone(),
                    ))
                    .build();
                Some(transport)
            }
            None => None,
        };

        Ok(Self {
            transport,
            from: config.email_from.clone(),
        })
    }

    /// Log-only mailer for tests.
    #[cfg(test)]
    pub fn disabled() -> Self {
        Self {
            transport: None,
            from: "noreply@yourdrive.example".to_string(),
        }
    }

    /// Sends the password-reset link to the user.
    ///
    /// Never fails outward: delivery problems are logged server-side only.
    pub async fn send_password_reset(&self, to: &str, reset_url: &str) {
        let Some(transport) = &self.transport else {
            tracing::info!("SMTP not configured; password reset link for {}: {}", to, reset_url);
            return;
        };

        let message = match self.build_reset_message(to, reset_url) {
            Ok(message) => message,
            Err(e) => {
                tracing::error!("Failed to build password reset email for {}: {}", to, e);
                return;
            }
        };

        if let Err(e) = transport.send(message).await {
            tracing::error!("Failed to send password reset email to {}: {}", to, e);
        }
    }

    fn build_reset_message(
        &self,
        to: &str,
        reset_url: &str,
    ) -> Result<Message, Box<dyn std::error::Error + Send + Sync>> {
        let body = format!(
            "<h2>Password Reset Request</h2>\
             <p>You requested to reset your password. Click the link below to reset it:</p>\
             <a href=\"{reset_url}\">{reset_url}</a>\
             <p>This link will expire in 1 hour.</p>\
             <p>If you didn't request this, please ignore this email.</p>"
        );

        Ok(Message::builder()
            .from(self.from.parse()?)
            .to(to.parse()?)
            .subject("Reset Your Password")
            .header(ContentType::TEXT_HTML)
            .body(body)?)
    }
}
