//! HTTP error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use signet_core::ApiError;
use thiserror::Error;

/// Errors for signed HTTP operations
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to compress request body: {0}")]
    Compress(#[from] std::io::Error),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("failed to parse request: {0}")]
    Parse(String),

    #[error("missing required header: {0}")]
    MissingHeader(&'static str),

    #[error("signature verification failed")]
    InvalidSignature,
}

/// Error response body returned by verifying servers
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            HttpError::Parse(_) => (StatusCode::BAD_REQUEST, "PARSE_ERROR"),
            HttpError::MissingHeader(_) => (StatusCode::UNAUTHORIZED, "MISSING_HEADER"),
            HttpError::InvalidSignature => (StatusCode::UNAUTHORIZED, "INVALID_SIGNATURE"),
            HttpError::Api(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
            HttpError::Request(_) | HttpError::Encode(_) | HttpError::Compress(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
