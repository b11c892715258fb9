//! Authentication boundary.
//!
//! Real credential verification is not implemented yet; routes are currently
//! open. This module pins down the seam a real implementation will slot into:
//! anything that can turn a bearer token into a [`Principal`].

use constant_time_eq::constant_time_eq;
use thiserror::Error;

/// The authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub subject: String,
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("missing credentials")]
    MissingCredentials,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("authentication is not configured")]
    NotConfigured,
}

/// Verifies a caller-supplied token and resolves it to a principal.
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, token: &str) -> Result<Principal, AuthError>;
}

/// Placeholder authenticator: a single shared secret mapped to a fixed subject.
///
/// Comparison is constant-time so the placeholder is at least not an oracle.
pub struct SharedSecretAuthenticator {
    secret: String,
    subject: String,
}

impl SharedSecretAuthenticator {
    pub fn new(secret: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            subject: subject.into(),
        }
    }
}

impl Authenticator for SharedSecretAuthenticator {
    fn authenticate(&self, token: &str) -> Result<Principal, AuthError> {
        if token.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        if constant_time_eq(token.as_bytes(), self.secret.as_bytes()) {
            Ok(Principal {
                subject: self.subject.clone(),
            })
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_secret_accepts_matching_token() {
        let auth = SharedSecretAuthenticator::new("s3cret", "admin");
        let principal = auth.authenticate("s3cret").unwrap();
        assert_eq!(principal.subject, "admin");
    }

    #[test]
    fn shared_secret_rejects_bad_or_empty_token() {
        let auth = SharedSecretAuthenticator::new("s3cret", "admin");
        assert!(matches!(
            auth.authenticate("wrong"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            auth.authenticate(""),
            Err(AuthError::MissingCredentials)
        ));
    }
}
