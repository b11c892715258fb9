use crate::auth::HubType;
use crate::handlers::{create_meeting_handler, GcalState};
use axum::{routing::post, Router};
use counsel_config::AppConfig;
use counsel_db::{DbClient, SqlAppointmentRepository};
use std::sync::Arc;

/// Creates a router containing all routes for the Google Meet feature.
///
/// The hub is built once at startup and shared; handlers only borrow it.
pub fn routes(config: Arc<AppConfig>, calendar_hub: Arc<HubType>, db_client: DbClient) -> Router {
    let state = Arc::new(GcalState {
        config,
        calendar_hub,
        appointments: SqlAppointmentRepository::new(db_client),
    });

    Router::new()
        .route("/meetings", post(create_meeting_handler))
        .with_state(state)
}
