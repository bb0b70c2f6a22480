use async_trait::async_trait;
use lettre::{
    Message, SmtpTransport, Transport,
    message::{MultiPart, header::ContentType},
    transport::smtp::authentication::Credentials,
};

use crate::{DeliveryError, Email, EmailConfig, Mailer};

/// Implicit TLS listens on 465 (SMTPS); submission ports upgrade with STARTTLS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TlsMode {
    Implicit,
    StartTls,
}

impl TlsMode {
    pub(crate) fn for_port(port: u16) -> Self {
        match port {
            465 => Self::Implicit,
            _ => Self::StartTls,
        }
    }
}

#[derive(Clone)]
pub struct SmtpMailer {
    transport: SmtpTransport,
}

impl SmtpMailer {
    pub fn new(config: &EmailConfig) -> Result<Self, DeliveryError> {
        let transport = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
            // Use builder_dangerous for unauthenticated SMTP (e.g., MailDev)
            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            let tls = TlsMode::for_port(config.smtp_port);
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                tls = ?tls,
                "SMTP transport initialized with authentication and TLS"
            );

            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

            let builder = match tls {
                TlsMode::Implicit => SmtpTransport::relay(&config.smtp_host)?,
                TlsMode::StartTls => SmtpTransport::starttls_relay(&config.smtp_host)?,
            };

            builder
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self { transport })
    }
}

pub(crate) fn build_message(email: &Email) -> Result<Message, DeliveryError> {
    let mut builder = Message::builder()
        .from(email.from.parse()?)
        .to(email.to.parse()?)
        .subject(&email.subject);

    if let Some(reply_to) = &email.reply_to {
        builder = builder.reply_to(reply_to.parse()?);
    }

    let message = match &email.text {
        Some(text) => {
            builder.multipart(MultiPart::alternative_plain_html(text.clone(), email.html.clone()))?
        }
        None => builder
            .header(ContentType::TEXT_HTML)
            .body(email.html.clone())?,
    };

    Ok(message)
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &Email) -> Result<(), DeliveryError> {
        let message = build_message(email)?;
        let transport = self.transport.clone();

        // lettre's SmtpTransport blocks on network IO
        tokio::task::spawn_blocking(move || transport.send(&message))
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))??;

        Ok(())
    }
}
