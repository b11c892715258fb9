use once_cell::sync::Lazy;
use reqwest::Client;
use std::time::Duration;

/// Default timeout for HTTP requests in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A static HTTP client that can be reused across the application.
/// This client is configured with a default timeout and follows redirects.
pub static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
});
