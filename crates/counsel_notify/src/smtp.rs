//! SMTP provider used as a fallback when the HTTP API is unavailable

use crate::error::ProviderError;
use crate::provider::{EmailMessage, EmailProvider};
use counsel_common::services::BoxFuture;
use counsel_config::{EmailConfig, SmtpConfig};
use lettre::message::{header::ContentType, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::env;
use tracing::{debug, error};

/// Sends email through an SMTP relay using lettre.
pub struct SmtpProvider {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpProvider {
    /// Build the provider from the email configuration.
    ///
    /// The password is a secret and is read from the `SMTP_PASSWORD`
    /// environment variable, never from config files.
    pub fn from_config(config: &EmailConfig) -> Result<Self, ProviderError> {
        counsel_config::ensure_dotenv_loaded();
        let smtp = config
            .smtp
            .as_ref()
            .ok_or_else(|| ProviderError::ConfigError("SMTP config missing".to_string()))?;

        let from = format!("{} <{}>", config.from_name, config.from_email)
            .parse::<Mailbox>()
            .map_err(|e| ProviderError::ConfigError(format!("Invalid from address: {e}")))?;

        let transport = Self::build_transport(smtp)?;
        Ok(Self { transport, from })
    }

    fn build_transport(
        smtp: &SmtpConfig,
    ) -> Result<AsyncSmtpTransport<Tokio1Executor>, ProviderError> {
        let builder = if smtp.tls {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&smtp.host)
                .map_err(|e| ProviderError::ConfigError(e.to_string()))?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp.host)
        }
        .port(smtp.port);

        let builder = match (&smtp.username, env::var("SMTP_PASSWORD").ok()) {
            (Some(username), Some(password)) => {
                builder.credentials(Credentials::new(username.clone(), password))
            }
            _ => builder,
        };

        Ok(builder.build())
    }
}

impl EmailProvider for SmtpProvider {
    fn name(&self) -> &'static str {
        "smtp"
    }

    fn send<'a>(&'a self, message: &'a EmailMessage<'a>) -> BoxFuture<'a, (), ProviderError> {
        Box::pin(async move {
            debug!("Sending email via SMTP to {}", message.to);

            let to = message
                .to
                .parse::<Mailbox>()
                .map_err(|e| ProviderError::MessageError(format!("Invalid recipient: {e}")))?;

            let email = Message::builder()
                .from(self.from.clone())
                .to(to)
                .subject(message.subject)
                .multipart(
                    MultiPart::alternative()
                        .singlepart(
                            SinglePart::builder()
                                .header(ContentType::TEXT_PLAIN)
                                .body(message.text.to_string()),
                        )
                        .singlepart(
                            SinglePart::builder()
                                .header(ContentType::TEXT_HTML)
                                .body(message.html.to_string()),
                        ),
                )
                .map_err(|e| ProviderError::MessageError(e.to_string()))?;

            self.transport.send(email).await.map_err(|e| {
                error!("SMTP send failed: {}", e);
                ProviderError::RequestError(e.to_string())
            })?;

            Ok(())
        })
    }
}
