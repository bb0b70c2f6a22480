//! Email notification service

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;

use crate::{DeliveryError, Email, EmailConfig, Provider, ResendMailer, SmtpMailer};

/// A transport able to deliver one [`Email`].
///
/// Each call is a single attempt; implementations never retry.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &Email) -> Result<(), DeliveryError>;
}

/// Logs emails instead of delivering them, for local development.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: &Email) -> Result<(), DeliveryError> {
        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            html_len = email.html.len(),
            "Email provider set to log, skipping delivery"
        );

        Ok(())
    }
}

/// Email service for sending notifications
#[derive(Clone)]
pub struct EmailService {
    mailer: Arc<dyn Mailer>,
    from: String,
}

impl EmailService {
    /// Create a new email service from configuration
    pub fn new(config: &EmailConfig) -> Result<Self, DeliveryError> {
        let mailer: Arc<dyn Mailer> = match config.provider {
            Provider::Resend => {
                tracing::info!(
                    api_url = %config.api_url,
                    from = %config.from_address,
                    timeout_secs = config.timeout_secs,
                    "Email service initialized with Resend"
                );
                Arc::new(ResendMailer::new(
                    &config.api_url,
                    &config.api_key,
                    Duration::from_secs(config.timeout_secs),
                )?)
            }
            Provider::Smtp => Arc::new(SmtpMailer::new(config)?),
            Provider::Log => {
                tracing::warn!("Email provider set to log, emails will not be delivered");
                Arc::new(LogMailer)
            }
        };

        Ok(Self {
            mailer,
            from: config.from_address.clone(),
        })
    }

    pub fn with_mailer(mailer: impl Mailer + 'static, from: impl Into<String>) -> Self {
        Self {
            mailer: Arc::new(mailer),
            from: from.into(),
        }
    }

    pub fn from_address(&self) -> &str {
        &self.from
    }

    #[tracing::instrument(
        skip_all,
        fields(to = tracing::field::Empty, subject = tracing::field::Empty)
    )]
    pub async fn send(
        &self,
        to: impl Into<String>,
        subject: impl Into<String>,
        html: impl Into<String>,
        plain: Option<String>,
        reply_to: Option<String>,
    ) -> Result<(), DeliveryError> {
        let email = Email {
            from: self.from.clone(),
            to: to.into(),
            reply_to,
            subject: subject.into(),
            html: html.into(),
            text: plain,
        };

        tracing::Span::current()
            .record("to", email.to.as_str())
            .record("subject", email.subject.as_str());

        tracing::info!("Sending email");

        self.mailer.send(&email).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryMailer;

    #[tokio::test]
    async fn test_send_uses_configured_from_address() {
        let mailer = MemoryMailer::default();
        let service = EmailService::with_mailer(mailer.clone(), "Ops <ops@example.com>");

        service
            .send(
                "jane@example.com",
                "Hi",
                "<p>Hi</p>",
                Some("Hi".to_owned()),
                None,
            )
            .await
            .unwrap();

        let sent = mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].from, "Ops <ops@example.com>");
        assert_eq!(sent[0].to, "jane@example.com");
        assert_eq!(sent[0].text.as_deref(), Some("Hi"));
    }

    #[tokio::test]
    async fn test_log_provider_never_fails() {
        let service = EmailService::new(&EmailConfig {
            provider: Provider::Log,
            ..Default::default()
        })
        .unwrap();

        assert!(
            service
                .send("jane@example.com", "Hi", "<p>Hi</p>", None, None)
                .await
                .is_ok()
        );
    }
}
