//! The `{ code, message, data }` response envelope

use crate::error::ApiError;
use serde::{Deserialize, Serialize};

/// The envelope every endpoint wraps its payload in
///
/// `code == 0` is success; any other code is a server-side error whose
/// meaning is endpoint-specific.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiEnvelope<T> {
    pub code: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

impl<T: Default> ApiEnvelope<T> {
    /// Unwrap the payload, mapping non-zero codes to [`ApiError`]
    ///
    /// A successful envelope with no `data` yields `T::default()`, so
    /// endpoints that return nothing still decode cleanly.
    pub fn into_result(self) -> Result<T, ApiError> {
        if self.code == 0 {
            Ok(self.data.unwrap_or_default())
        } else {
            Err(ApiError {
                code: self.code,
                message: self.message.unwrap_or_default(),
            })
        }
    }
}
