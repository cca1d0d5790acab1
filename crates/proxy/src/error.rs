//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that maps each failure kind to exactly
//! one HTTP status and a JSON `{error, [details]}` body. Route handlers
//! return `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::shopify::UpstreamError;

/// Application-level error type for the proxy.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required query parameter is missing or empty.
    #[error("shop_domain and access_token parameters are required")]
    MissingParams,

    /// The upstream call failed.
    #[error(transparent)]
    Upstream(UpstreamError),

    /// Unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<UpstreamError> for AppError {
    fn from(err: UpstreamError) -> Self {
        match err {
            // A 2xx exchange whose body cannot be decoded is not an upstream
            // outcome the client can act on; it becomes the internal case
            UpstreamError::Decode(msg) => Self::Internal(msg),
            other => Self::Upstream(other),
        }
    }
}

/// JSON error envelope returned to the client.
///
/// `details` carries the raw upstream body and is only present for the
/// upstream-status case.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl AppError {
    /// The response status for this error.
    ///
    /// An upstream protocol error forwards the upstream's own status code,
    /// falling back to 500 if the code is not representable.
    fn status(&self) -> StatusCode {
        match self {
            Self::MissingParams => StatusCode::BAD_REQUEST,
            Self::Upstream(err) => match err {
                UpstreamError::Status { status, .. } => StatusCode::from_u16(*status)
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                UpstreamError::Timeout => StatusCode::GATEWAY_TIMEOUT,
                UpstreamError::Connect | UpstreamError::Transport(_) => StatusCode::BAD_GATEWAY,
                UpstreamError::Decode(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The JSON body for this error.
    fn body(&self) -> ErrorBody {
        let details = match self {
            Self::Upstream(UpstreamError::Status { body, .. }) => Some(body.clone()),
            _ => None,
        };

        ErrorBody {
            error: self.to_string(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server-side failures to Sentry; client input errors and
        // forwarded upstream statuses are expected traffic
        if matches!(
            self,
            Self::Internal(_)
                | Self::Upstream(
                    UpstreamError::Timeout
                        | UpstreamError::Connect
                        | UpstreamError::Transport(_)
                        | UpstreamError::Decode(_)
                )
        ) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        (self.status(), Json(self.body())).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
