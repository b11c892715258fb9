//! Provider abstraction for outbound email

use crate::error::ProviderError;
use counsel_common::services::BoxFuture;

/// A fully rendered email, ready for any provider to deliver.
#[derive(Debug, Clone)]
pub struct EmailMessage<'a> {
    pub to: &'a str,
    pub subject: &'a str,
    pub text: &'a str,
    pub html: &'a str,
}

/// A single delivery channel (HTTP API, SMTP relay).
///
/// Object safe so the dispatcher can hold a primary and a fallback behind
/// the same type.
pub trait EmailProvider: Send + Sync {
    /// Short provider name used in logs
    fn name(&self) -> &'static str;

    /// Deliver one message
    fn send<'a>(&'a self, message: &'a EmailMessage<'a>) -> BoxFuture<'a, (), ProviderError>;
}
