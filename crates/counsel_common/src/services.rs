//! Service abstractions for external services.
//!
//! These traits decouple the feature crates from concrete provider
//! implementations so handlers can be exercised with test doubles.

use std::future::Future;
use std::pin::Pin;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// Type alias for a boxed future with a plain (non-Result) output
pub type PlainBoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A trait for notification service operations.
///
/// Delivery is best-effort: implementations report the outcome through the
/// returned boolean and never surface provider errors to the caller. A `false`
/// means every configured provider failed.
pub trait NotificationService: Send + Sync {
    /// Send a templated email. Returns `true` if any provider accepted it.
    fn send_email<'a>(
        &'a self,
        to: &'a str,
        subject: &'a str,
        text: &'a str,
        html: &'a str,
    ) -> PlainBoxFuture<'a, bool>;
}
