//! Counselor directory endpoints for Counsel
//!
//! Exposes the public counselor listing, single-profile lookup and the
//! counselor-facing bio update.

pub mod handlers;
pub mod routes;

pub use handlers::DirectoryState;
pub use routes::routes;

#[cfg(test)]
mod routes_test;
