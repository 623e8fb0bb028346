use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use models::errors::ModelError;
use service::errors::ServiceError;

/// JSON API error: status code plus a short title and optional detail.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({"error": self.title, "detail": self.detail});
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) | ServiceError::Model(ModelError::Validation(msg)) => {
                Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(msg))
            }
            ServiceError::NotFound(msg) => {
                Self::new(StatusCode::NOT_FOUND, "Not Found", Some(msg))
            }
            ServiceError::Db(msg) | ServiceError::Model(ModelError::Db(msg)) => {
                error!(err = %msg, "store error");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some(msg))
            }
        }
    }
}
