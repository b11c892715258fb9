//! Email dispatcher with primary/fallback delivery

use crate::error::ProviderError;
use crate::mailersend::MailerSendProvider;
use crate::provider::{EmailMessage, EmailProvider};
use crate::smtp::SmtpProvider;
use counsel_common::services::{NotificationService, PlainBoxFuture};
use counsel_config::AppConfig;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Delivers email through a primary provider, falling back to a second one
/// when the primary fails.
///
/// Send outcomes are reported as a boolean; the dispatcher never propagates
/// provider errors so the appointment flows cannot fail on mail trouble.
pub struct EmailDispatcher {
    primary: Box<dyn EmailProvider>,
    fallback: Option<Box<dyn EmailProvider>>,
}

impl EmailDispatcher {
    pub fn new(primary: Box<dyn EmailProvider>, fallback: Option<Box<dyn EmailProvider>>) -> Self {
        Self { primary, fallback }
    }

    /// Build the dispatcher from the application configuration.
    ///
    /// MailerSend is the primary channel when its API key is present; SMTP
    /// serves as fallback, or as primary when MailerSend is not configured.
    pub fn from_config(config: &Arc<AppConfig>) -> Result<Self, ProviderError> {
        let email = config
            .email
            .as_ref()
            .ok_or_else(|| ProviderError::ConfigError("Email configuration is missing".to_string()))?;

        let mailersend = match MailerSendProvider::from_config(email) {
            Ok(provider) => Some(Box::new(provider) as Box<dyn EmailProvider>),
            Err(e) => {
                warn!("MailerSend not available: {}", e);
                None
            }
        };

        let smtp = if email.smtp.is_some() {
            Some(Box::new(SmtpProvider::from_config(email)?) as Box<dyn EmailProvider>)
        } else {
            None
        };

        match (mailersend, smtp) {
            (Some(primary), fallback) => Ok(Self::new(primary, fallback)),
            (None, Some(primary)) => Ok(Self::new(primary, None)),
            (None, None) => Err(ProviderError::ConfigError(
                "No email provider configured".to_string(),
            )),
        }
    }

    async fn dispatch(&self, message: &EmailMessage<'_>) -> bool {
        match self.primary.send(message).await {
            Ok(()) => {
                info!(
                    provider = self.primary.name(),
                    to = message.to,
                    "Email sent"
                );
                return true;
            }
            Err(e) => {
                warn!(
                    provider = self.primary.name(),
                    to = message.to,
                    "Primary email provider failed: {}",
                    e
                );
            }
        }

        if let Some(fallback) = &self.fallback {
            match fallback.send(message).await {
                Ok(()) => {
                    info!(
                        provider = fallback.name(),
                        to = message.to,
                        "Email sent via fallback"
                    );
                    return true;
                }
                Err(e) => {
                    error!(
                        provider = fallback.name(),
                        to = message.to,
                        "Fallback email provider failed: {}",
                        e
                    );
                }
            }
        } else {
            error!(to = message.to, "No fallback email provider configured");
        }

        false
    }
}

impl NotificationService for EmailDispatcher {
    fn send_email<'a>(
        &'a self,
        to: &'a str,
        subject: &'a str,
        text: &'a str,
        html: &'a str,
    ) -> PlainBoxFuture<'a, bool> {
        Box::pin(async move {
            let message = EmailMessage {
                to,
                subject,
                text,
                html,
            };
            self.dispatch(&message).await
        })
    }
}
