use crate::handlers::{
    counselor_appointments_handler, create_appointment_handler, update_status_handler,
    user_appointments_handler, AppointmentsState,
};
use axum::{
    routing::{get, post, put},
    Router,
};
use counsel_common::services::NotificationService;
use counsel_db::{DbClient, SqlAppointmentRepository, SqlCounselorRepository, SqlUserRepository};
use std::sync::Arc;

/// Creates a router containing all routes for the appointment lifecycle.
pub fn routes(db_client: DbClient, notifier: Option<Arc<dyn NotificationService>>) -> Router {
    let state = Arc::new(AppointmentsState {
        appointments: SqlAppointmentRepository::new(db_client.clone()),
        counselors: SqlCounselorRepository::new(db_client.clone()),
        users: SqlUserRepository::new(db_client),
        notifier,
    });

    Router::new()
        .route("/appointments", post(create_appointment_handler))
        .route(
            "/appointments/counselor/{counselor_id}",
            get(counselor_appointments_handler),
        )
        .route("/appointments/user/{user_id}", get(user_appointments_handler))
        .route("/appointments/{id}/status", put(update_status_handler))
        .with_state(state)
}
