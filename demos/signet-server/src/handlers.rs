//! Request handlers for the demo server

use axum::Json;
use serde::Serialize;
use signet_core::{ApiEnvelope, ParameterSet};
use signet_http::VerifiedParams;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
}

/// Health check endpoint (unsigned)
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// Echo back the verified parameter set
pub async fn echo(VerifiedParams(params): VerifiedParams) -> Json<ApiEnvelope<ParameterSet>> {
    tracing::info!(params = params.len(), "verified echo request");

    Json(ApiEnvelope {
        code: 0,
        message: Some("ok".to_string()),
        data: Some(params),
    })
}

/// Accept a tracking event and return an empty success envelope
pub async fn track(VerifiedParams(params): VerifiedParams) -> Json<ApiEnvelope<ParameterSet>> {
    let event = params
        .get("event")
        .and_then(|v| v.text_form().ok())
        .unwrap_or_default();
    tracing::info!(%event, "verified tracking event");

    Json(ApiEnvelope {
        code: 0,
        message: None,
        data: None,
    })
}
