use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use findify_core::error::CoreError;
use findify_core::messages;
use findify_fragrance::FragranceApiError;

use crate::response::Envelope;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for brief-intake failures and adds persistence and
/// upstream variants. Renders as the `{ success: false, message, details? }`
/// envelope; raw error text only reaches `details` in debug mode.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The endpoint exists but does not accept this HTTP method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// A domain-level error from `findify_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A failure talking to the fragrance API.
    #[error(transparent)]
    Upstream(#[from] FragranceApiError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Render the error envelope. With `debug` on, internal error text is
    /// attached as `details`.
    pub fn render(self, debug: bool) -> Response {
        let internal = |text: String| debug.then_some(text);

        let (status, envelope) = match self {
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                Envelope::failure(messages::METHOD_NOT_ALLOWED),
            ),

            AppError::Core(core) => {
                tracing::warn!(error = %core, "Brief rejected");
                (StatusCode::BAD_REQUEST, Envelope::failure(core.user_message()))
            }

            AppError::Database(err) => {
                tracing::error!(error = %err, "Failed to persist brief");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Envelope::failure(messages::PERSISTENCE_FAILED)
                        .with_details(internal(err.to_string())),
                )
            }

            AppError::Upstream(err) => classify_upstream_error(err, debug),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, Envelope::failure(msg)),
        };

        (status, envelope).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.render(false)
    }
}

/// Render a handler result, turning errors into envelopes under `debug`.
pub fn respond<T: IntoResponse>(result: AppResult<T>, debug: bool) -> Response {
    match result {
        Ok(value) => value.into_response(),
        Err(err) => err.render(debug),
    }
}

/// Classify a fragrance API error into an HTTP status and envelope.
///
/// - Missing key maps to 500 with a configuration hint.
/// - Upstream error statuses (4xx/5xx) are mirrored, with the upstream body
///   as `details`.
/// - Network and decoding failures map to 502.
fn classify_upstream_error(err: FragranceApiError, debug: bool) -> (StatusCode, Envelope) {
    match err {
        FragranceApiError::MissingApiKey => {
            tracing::error!("Fragrance API called without FRAGRANCE_API_KEY");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Envelope::failure(messages::UPSTREAM_KEY_MISSING),
            )
        }
        FragranceApiError::ApiError { status, body } => {
            tracing::warn!(status, "Fragrance API returned an error");
            let status = StatusCode::from_u16(status)
                .ok()
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY);
            (
                status,
                Envelope::failure(messages::UPSTREAM_FAILED).with_details(Some(body)),
            )
        }
        FragranceApiError::InvalidBaseUrl(url) => {
            tracing::error!(%url, "Fragrance API base URL is unusable");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Envelope::failure(messages::UPSTREAM_FAILED).with_details(debug.then_some(url)),
            )
        }
        FragranceApiError::Request(e) => {
            tracing::error!(error = %e, "Fragrance API request failed");
            (
                StatusCode::BAD_GATEWAY,
                Envelope::failure(messages::UPSTREAM_FAILED)
                    .with_details(debug.then(|| e.to_string())),
            )
        }
    }
}
