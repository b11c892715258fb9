//! Repository for registered users

use crate::error::DbError;

pub use counsel_common::models::User;

/// Repository for registered users.
///
/// Account creation lives outside this service; appointment flows only need
/// to look users up for notification addressing.
pub trait UserRepository {
    /// Initialize the database schema
    fn init_schema(&self) -> impl std::future::Future<Output = Result<(), DbError>> + Send;

    /// Find a user by id
    ///
    /// # Returns
    ///
    /// The user if found, or None if not found
    fn find_by_id(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<Option<User>, DbError>> + Send;
}
