//! Error-to-HTTP response conversion.
//!
//! Implements `IntoResponse` for [`webinar_common::Error`] so that route
//! handlers can return `Result<T, AppError>` and use `?` on library calls.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use webinar_common::Error;

/// Wrapper so we can implement `IntoResponse` for an external type.
#[derive(Debug)]
pub struct AppError(pub Error);

impl AppError {
    /// 400 with the generic message used for malformed request bodies.
    pub fn invalid_request() -> Self {
        Self(Error::invalid_input("Invalid request"))
    }
}

impl From<Error> for AppError {
    fn from(e: Error) -> Self {
        Self(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(
                status = %status,
                error = %self.0,
                source = ?std::error::Error::source(&self.0),
                "Server error in handler"
            );
        }

        let mut response = (status, Json(json!({ "error": self.0.to_string() }))).into_response();

        if let Error::RangeNotSatisfiable { size } = self.0 {
            if let Ok(value) = HeaderValue::from_str(&format!("bytes */{size}")) {
                response.headers_mut().insert(header::CONTENT_RANGE, value);
            }
        }

        response
    }
}
