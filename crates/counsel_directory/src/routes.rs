use crate::handlers::{get_counselor_handler, list_counselors_handler, update_bio_handler, DirectoryState};
use axum::{
    routing::{get, put},
    Router,
};
use counsel_db::{DbClient, SqlCounselorRepository};
use std::sync::Arc;

/// Creates a router containing all routes for the counselor directory.
pub fn routes(db_client: DbClient) -> Router {
    let state = Arc::new(DirectoryState {
        repo: SqlCounselorRepository::new(db_client),
    });

    Router::new()
        .route("/counselors", get(list_counselors_handler))
        .route("/counselors/{id}", get(get_counselor_handler))
        .route("/counselors/{id}/bio", put(update_bio_handler))
        .with_state(state)
}
