//! Shared response types for API handlers.
//!
//! Submission endpoints answer with the `{ success, message, details? }`
//! [`Envelope`] the brief form expects; data-returning endpoints use
//! [`DataResponse`]. Everything is sent as `application/json; charset=utf-8`.

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Content type of every JSON body this API sends.
pub const JSON_UTF8: &str = "application/json; charset=utf-8";

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> IntoResponse for DataResponse<T> {
    fn into_response(self) -> Response {
        json_utf8(StatusCode::OK, &self)
    }
}

/// Outcome envelope for submissions and proxy failures.
///
/// `details` is only serialized when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl Envelope {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            details: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Option<String>) -> Self {
        self.details = details;
        self
    }
}

/// Sent with `200 OK`; pair with a [`StatusCode`] in a tuple to override.
impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        json_utf8(StatusCode::OK, &self)
    }
}

/// Serialize `body` as JSON with an explicit UTF-8 charset.
pub fn json_utf8<T: Serialize + ?Sized>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => (
            status,
            [(CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8))],
            bytes,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize response body");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
