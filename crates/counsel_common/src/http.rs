use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::error::{AppError, HttpStatusCode};

// Include the client module
pub mod client;

/// Extension trait for AppError to convert it to an Axum HTTP response.
pub trait IntoHttpResponse {
    /// Converts the error into an Axum HTTP response.
    fn into_http_response(self) -> Response;
}

impl IntoHttpResponse for AppError {
    fn into_http_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Server-side failures are logged with full context but surfaced
        // generically; validation/not-found/conflict messages go to the client.
        let error_message = if status_code.is_server_error() {
            error!("Request failed: {}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        let body = Json(json!({
            "error": {
                "message": error_message,
                "code": status_code.as_u16(),
            }
        }));

        (status_code, body).into_response()
    }
}

/// Implement IntoResponse for AppError to make it easier to use in Axum handlers.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}

/// JSON body extractor that reports malformed or incomplete bodies as a
/// validation error (400) instead of axum's default 422 rejection.
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ValidJson(value)),
            Err(rejection) => Err(AppError::ValidationError(rejection.body_text())),
        }
    }
}
