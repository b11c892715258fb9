//! Error types for the notification providers

use thiserror::Error;

/// Errors a single email provider can report.
///
/// These never cross the dispatcher boundary; the dispatcher logs them and
/// reports a plain boolean outcome to callers.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider is missing configuration or credentials
    #[error("Provider configuration error: {0}")]
    ConfigError(String),

    /// The request to the provider could not be sent
    #[error("Provider request error: {0}")]
    RequestError(String),

    /// The provider rejected the request
    #[error("Provider API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// The message itself could not be built
    #[error("Message build error: {0}")]
    MessageError(String),
}
