//! Router-level tests for the directory endpoints, backed by in-memory SQLite.

use crate::routes::routes;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use counsel_db::{CounselorRepository, DbClient, SqlCounselorRepository};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::ServiceExt;

static DB_SEQ: AtomicUsize = AtomicUsize::new(0);

async fn test_app() -> (Router, DbClient) {
    let seq = DB_SEQ.fetch_add(1, Ordering::SeqCst);
    let url = format!("sqlite:file:counsel_directory_test_{seq}?mode=memory&cache=shared");
    let client = DbClient::from_url(&url).await.unwrap();
    SqlCounselorRepository::new(client.clone())
        .init_schema()
        .await
        .unwrap();
    (routes(client.clone()), client)
}

async fn seed_counselor(client: &DbClient, name: &str) {
    let query = format!(
        "INSERT INTO counselors (name, credentials, institution, degree, photo_url, bio, email) \
         VALUES ('{name}', 'LMHC', 'State University', 'M.A.', NULL, 'Here to help.', 'c@example.com')"
    );
    client.execute(&query).await.unwrap();
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn list_counselors_returns_all_rows() {
    let (app, client) = test_app().await;
    seed_counselor(&client, "Dr. Alice Hart").await;
    seed_counselor(&client, "Dr. Ben Osei").await;

    let response = app
        .oneshot(Request::get("/counselors").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["name"], "Dr. Alice Hart");
}

#[tokio::test]
async fn get_counselor_returns_profile_or_404() {
    let (app, client) = test_app().await;
    seed_counselor(&client, "Dr. Alice Hart").await;

    let response = app
        .clone()
        .oneshot(Request::get("/counselors/1").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["name"], "Dr. Alice Hart");
    assert_eq!(body["bio"], "Here to help.");

    let response = app
        .oneshot(Request::get("/counselors/99").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_bio_persists_and_guards() {
    let (app, client) = test_app().await;
    seed_counselor(&client, "Dr. Alice Hart").await;

    let response = app
        .clone()
        .oneshot(
            Request::put("/counselors/1/bio")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"bio":"Fresh perspective"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Counselor bio updated successfully");

    let repo = SqlCounselorRepository::new(client.clone());
    let counselor = repo.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(counselor.bio.as_deref(), Some("Fresh perspective"));

    // Unknown counselor
    let response = app
        .clone()
        .oneshot(
            Request::put("/counselors/99/bio")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"bio":"Nobody"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Blank bio is rejected before touching the database
    let response = app
        .clone()
        .oneshot(
            Request::put("/counselors/1/bio")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"bio":"   "}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // A body without the bio field is a 400, not axum's 422 default
    let response = app
        .oneshot(
            Request::put("/counselors/1/bio")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
