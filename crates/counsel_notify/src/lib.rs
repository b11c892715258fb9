//! Email notification dispatch for Counsel
//!
//! This crate implements the [`NotificationService`] trait from
//! `counsel_common` with a two-channel email dispatcher: a MailerSend HTTP
//! provider and an SMTP fallback. Delivery is best-effort; callers get a
//! boolean outcome and never an error.
//!
//! [`NotificationService`]: counsel_common::services::NotificationService

pub mod dispatcher;
pub mod error;
pub mod mailersend;
pub mod provider;
pub mod smtp;
pub mod templates;

pub use dispatcher::EmailDispatcher;
pub use error::ProviderError;
pub use provider::{EmailMessage, EmailProvider};
pub use templates::EmailTemplate;
