//! Error types for signet-sign

use thiserror::Error;

/// Errors that can occur while building signing input
#[derive(Debug, Error)]
pub enum SignError {
    #[error("failed to render parameter value: {0}")]
    Render(#[from] serde_json::Error),
}
