//! Error types for signet-core

use thiserror::Error;

/// A non-zero envelope code returned by the server
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("server returned code {code}: {message}")]
pub struct ApiError {
    pub code: i32,
    pub message: String,
}
