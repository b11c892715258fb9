//! MailerSend HTTP API provider

use crate::error::ProviderError;
use crate::provider::{EmailMessage, EmailProvider};
use counsel_common::services::BoxFuture;
use counsel_common::HTTP_CLIENT;
use counsel_config::EmailConfig;
use serde::Serialize;
use std::env;
use tracing::{debug, error};

const DEFAULT_API_URL: &str = "https://api.mailersend.com";

#[derive(Serialize)]
struct Recipient<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct Sender<'a> {
    email: &'a str,
    name: &'a str,
}

#[derive(Serialize)]
struct SendEmailPayload<'a> {
    from: Sender<'a>,
    to: Vec<Recipient<'a>>,
    subject: &'a str,
    text: &'a str,
    html: &'a str,
}

/// Sends email through the MailerSend REST API.
pub struct MailerSendProvider {
    api_url: String,
    api_key: String,
    from_email: String,
    from_name: String,
}

impl MailerSendProvider {
    /// Build the provider from the email configuration.
    ///
    /// The API key is a secret and is read from the `MAILERSEND_API_KEY`
    /// environment variable, never from config files.
    pub fn from_config(config: &EmailConfig) -> Result<Self, ProviderError> {
        counsel_config::ensure_dotenv_loaded();
        let api_key = env::var("MAILERSEND_API_KEY").map_err(|_| {
            ProviderError::ConfigError("MAILERSEND_API_KEY env var not set".to_string())
        })?;

        let api_url = config
            .mailersend
            .as_ref()
            .and_then(|ms| ms.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Self {
            api_url,
            api_key,
            from_email: config.from_email.clone(),
            from_name: config.from_name.clone(),
        })
    }
}

impl EmailProvider for MailerSendProvider {
    fn name(&self) -> &'static str {
        "mailersend"
    }

    fn send<'a>(&'a self, message: &'a EmailMessage<'a>) -> BoxFuture<'a, (), ProviderError> {
        Box::pin(async move {
            let url = format!("{}/v1/email", self.api_url.trim_end_matches('/'));
            debug!("Sending email via MailerSend to {}", message.to);

            let payload = SendEmailPayload {
                from: Sender {
                    email: &self.from_email,
                    name: &self.from_name,
                },
                to: vec![Recipient { email: message.to }],
                subject: message.subject,
                text: message.text,
                html: message.html,
            };

            let response = HTTP_CLIENT
                .post(&url)
                .bearer_auth(&self.api_key)
                .json(&payload)
                .send()
                .await
                .map_err(|e| {
                    error!("MailerSend request failed: {}", e);
                    ProviderError::RequestError(e.to_string())
                })?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                error!("MailerSend API error ({}): {}", status, body);
                return Err(ProviderError::ApiError {
                    status: status.as_u16(),
                    message: body,
                });
            }

            Ok(())
        })
    }
}
