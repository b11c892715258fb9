//! Tests for the SQL repositories against an in-memory SQLite database.

use crate::repositories::{
    AppointmentRepository, CounselorRepository, NewAppointment, SqlAppointmentRepository,
    SqlCounselorRepository, SqlUserRepository, UserRepository,
};
use crate::{AppointmentStatus, DbClient};
use std::sync::atomic::{AtomicUsize, Ordering};

static DB_SEQ: AtomicUsize = AtomicUsize::new(0);

/// Each test gets its own named in-memory database. Shared cache keeps the
/// database alive across the pool's connections.
async fn test_client() -> DbClient {
    let seq = DB_SEQ.fetch_add(1, Ordering::SeqCst);
    let url = format!("sqlite:file:counsel_db_test_{seq}?mode=memory&cache=shared");
    DbClient::from_url(&url).await.unwrap()
}

async fn setup() -> (
    DbClient,
    SqlCounselorRepository,
    SqlUserRepository,
    SqlAppointmentRepository,
) {
    let client = test_client().await;
    let counselors = SqlCounselorRepository::new(client.clone());
    let users = SqlUserRepository::new(client.clone());
    let appointments = SqlAppointmentRepository::new(client.clone());
    counselors.init_schema().await.unwrap();
    users.init_schema().await.unwrap();
    appointments.init_schema().await.unwrap();
    (client, counselors, users, appointments)
}

async fn seed_counselor(client: &DbClient, name: &str, email: &str) {
    let query = format!(
        "INSERT INTO counselors (name, credentials, institution, degree, photo_url, bio, email) \
         VALUES ('{name}', 'LMHC', 'State University', 'M.A.', NULL, 'Here to help.', '{email}')"
    );
    client.execute(&query).await.unwrap();
}

async fn seed_user(client: &DbClient, name: &str, email: &str) {
    let query = format!("INSERT INTO users (name, email) VALUES ('{name}', '{email}')");
    client.execute(&query).await.unwrap();
}

fn new_appointment(counselor_id: i64, user_id: i64) -> NewAppointment {
    NewAppointment {
        counselor_id,
        user_id,
        appointment_datetime: "2025-06-01T10:00".to_string(),
        message: Some("Looking forward to it".to_string()),
    }
}

#[tokio::test]
async fn client_health_check() {
    let client = test_client().await;
    assert!(client.is_healthy().await);
}

#[tokio::test]
async fn counselors_are_listed_and_found() {
    let (client, counselors, _, _) = setup().await;

    assert!(counselors.find_all().await.unwrap().is_empty());

    seed_counselor(&client, "Dr. Alice Hart", "alice@example.com").await;
    seed_counselor(&client, "Dr. Ben Osei", "ben@example.com").await;

    let all = counselors.find_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "Dr. Alice Hart");
    assert_eq!(all[0].credentials.as_deref(), Some("LMHC"));

    let found = counselors.find_by_id(all[1].id).await.unwrap().unwrap();
    assert_eq!(found.email, "ben@example.com");

    assert!(counselors.find_by_id(9999).await.unwrap().is_none());
}

#[tokio::test]
async fn counselor_bio_update_reports_matched_row() {
    let (client, counselors, _, _) = setup().await;
    seed_counselor(&client, "Dr. Alice Hart", "alice@example.com").await;

    assert!(counselors.update_bio(1, "New bio text").await.unwrap());
    let found = counselors.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(found.bio.as_deref(), Some("New bio text"));

    assert!(!counselors.update_bio(9999, "Nobody home").await.unwrap());
}

#[tokio::test]
async fn users_are_found_by_id() {
    let (client, _, users, _) = setup().await;
    seed_user(&client, "Casey Lee", "casey@example.com").await;

    let user = users.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(user.name, "Casey Lee");
    assert_eq!(user.email, "casey@example.com");

    assert!(users.find_by_id(42).await.unwrap().is_none());
}

#[tokio::test]
async fn appointments_enter_pending_and_round_trip() {
    let (client, _, _, appointments) = setup().await;
    seed_counselor(&client, "Dr. Alice Hart", "alice@example.com").await;
    seed_user(&client, "Casey Lee", "casey@example.com").await;

    let id = appointments.insert(&new_appointment(1, 1)).await.unwrap();
    assert!(id > 0);

    let found = appointments.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(found.status, AppointmentStatus::Pending);
    assert_eq!(found.appointment_datetime, "2025-06-01T10:00");
    assert_eq!(found.message.as_deref(), Some("Looking forward to it"));
    assert!(found.meeting_link.is_none());
}

#[tokio::test]
async fn appointment_status_and_meeting_link_updates() {
    let (client, _, _, appointments) = setup().await;
    seed_counselor(&client, "Dr. Alice Hart", "alice@example.com").await;
    seed_user(&client, "Casey Lee", "casey@example.com").await;

    let id = appointments.insert(&new_appointment(1, 1)).await.unwrap();

    assert!(appointments
        .update_status(id, AppointmentStatus::Confirmed)
        .await
        .unwrap());
    assert!(appointments
        .set_meeting_link(id, "https://meet.google.com/abc-defg-hij")
        .await
        .unwrap());

    let found = appointments.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(found.status, AppointmentStatus::Confirmed);
    assert_eq!(
        found.meeting_link.as_deref(),
        Some("https://meet.google.com/abc-defg-hij")
    );

    // No matching row reports false rather than an error.
    assert!(!appointments
        .update_status(9999, AppointmentStatus::Cancelled)
        .await
        .unwrap());
    assert!(!appointments
        .set_meeting_link(9999, "https://meet.google.com/xyz")
        .await
        .unwrap());
}

#[tokio::test]
async fn listings_join_display_names_and_order_newest_first() {
    let (client, _, _, appointments) = setup().await;
    seed_counselor(&client, "Dr. Alice Hart", "alice@example.com").await;
    seed_counselor(&client, "Dr. Ben Osei", "ben@example.com").await;
    seed_user(&client, "Casey Lee", "casey@example.com").await;
    seed_user(&client, "Dana Park", "dana@example.com").await;

    let first = appointments.insert(&new_appointment(1, 1)).await.unwrap();
    let second = appointments.insert(&new_appointment(1, 2)).await.unwrap();
    appointments.insert(&new_appointment(2, 1)).await.unwrap();

    let for_counselor = appointments.list_for_counselor(1).await.unwrap();
    assert_eq!(for_counselor.len(), 2);
    assert_eq!(for_counselor[0].appointment.id, second);
    assert_eq!(for_counselor[0].user_name, "Dana Park");
    assert_eq!(for_counselor[1].appointment.id, first);
    assert_eq!(for_counselor[1].user_name, "Casey Lee");

    let for_user = appointments.list_for_user(1).await.unwrap();
    assert_eq!(for_user.len(), 2);
    assert_eq!(for_user[0].counselor_name, "Dr. Ben Osei");
    assert_eq!(for_user[1].counselor_name, "Dr. Alice Hart");

    assert!(appointments.list_for_counselor(99).await.unwrap().is_empty());
}
