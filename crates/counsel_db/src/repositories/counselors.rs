//! Repository for counselor profiles

use crate::error::DbError;

// Re-export Counselor from counsel_common for convenience
pub use counsel_common::models::Counselor;

/// Repository for counselor profiles
///
/// Counselor rows are created by a seed/admin process; this repository only
/// reads them and applies counselor-initiated bio edits.
pub trait CounselorRepository {
    /// Initialize the database schema
    ///
    /// Creates the counselors table if it doesn't already exist.
    fn init_schema(&self) -> impl std::future::Future<Output = Result<(), DbError>> + Send;

    /// List every counselor for the directory view
    fn find_all(&self) -> impl std::future::Future<Output = Result<Vec<Counselor>, DbError>> + Send;

    /// Find a counselor by id
    ///
    /// # Returns
    ///
    /// The counselor if found, or None if not found
    fn find_by_id(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<Option<Counselor>, DbError>> + Send;

    /// Replace a counselor's free-text bio
    ///
    /// # Returns
    ///
    /// `true` if a row was updated, `false` if no counselor matched the id
    fn update_bio(
        &self,
        id: i64,
        bio: &str,
    ) -> impl std::future::Future<Output = Result<bool, DbError>> + Send;
}
