//! Axum-specific error types and mappings.
//!
//! Error responses use the `{"detail": "..."}` body the form reads its
//! message from.

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use crisislens_core::AnalysisError;
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Required form fields missing or malformed.
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    /// Upload exceeds the configured body limit.
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// Service unavailable (e.g., model not configured).
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl HttpError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `detail` field.
    pub fn detail(&self) -> &str {
        match self {
            Self::BadRequest(msg)
            | Self::Unprocessable(msg)
            | Self::PayloadTooLarge(msg)
            | Self::ServiceUnavailable(msg)
            | Self::Internal(msg) => msg,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), detail = self.detail(), "request failed");
        } else {
            tracing::info!(status = status.as_u16(), detail = self.detail(), "request rejected");
        }

        let body = ErrorBody {
            detail: self.detail().to_owned(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<AnalysisError> for HttpError {
    fn from(err: AnalysisError) -> Self {
        let detail = err.to_string();
        match err {
            AnalysisError::Unavailable(_) => Self::ServiceUnavailable(detail),
            AnalysisError::UnsupportedImageType(_) | AnalysisError::InvalidImage(_) => {
                Self::BadRequest(detail)
            }
            AnalysisError::Model(_) | AnalysisError::InvalidModelOutput => Self::Internal(detail),
        }
    }
}

impl From<MultipartError> for HttpError {
    fn from(err: MultipartError) -> Self {
        let detail = err.body_text();
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge(detail)
        } else {
            Self::BadRequest(detail)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crisislens_core::ModelError;

    #[test]
    fn analysis_errors_map_to_status_codes() {
        let cases = [
            (
                AnalysisError::Unavailable("no key".into()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                AnalysisError::UnsupportedImageType("image/gif".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AnalysisError::InvalidImage("eof".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AnalysisError::Model(ModelError::EmptyResponse),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AnalysisError::InvalidModelOutput,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(HttpError::from(err).status(), expected);
        }
    }

    #[test]
    fn detail_is_the_user_facing_message() {
        let err = HttpError::from(AnalysisError::InvalidImage("bad header".into()));
        assert_eq!(err.detail(), "Invalid image file.");
    }
}
