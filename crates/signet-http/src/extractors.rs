//! Axum extractor for verifying signed requests

use crate::error::HttpError;
use async_trait::async_trait;
use axum::extract::{FromRef, FromRequest, Request};
use axum::http::HeaderMap;
use axum::Json;
use signet_core::{ParameterSet, SecretProvider};
use std::sync::Arc;

/// Server-side verification state: the per-path secret source
///
/// Cloning is cheap; the provider is shared.
#[derive(Clone)]
pub struct Verifier {
    secrets: Arc<dyn SecretProvider>,
}

impl Verifier {
    pub fn new(secrets: impl SecretProvider + 'static) -> Self {
        Self {
            secrets: Arc::new(secrets),
        }
    }

    /// Recompute the signature for a received request and compare
    ///
    /// `timestamp_text` and `token` are the header values exactly as
    /// received; re-rendering the timestamp would break verification
    /// for any non-canonical width.
    pub fn verify(
        &self,
        params: &ParameterSet,
        timestamp_text: &str,
        token: &str,
        path: &str,
        claimed: &str,
    ) -> bool {
        let secret = self.secrets.secret_for(path);
        signet_sign::verify(params, timestamp_text, token, &secret, claimed)
    }
}

/// Extractor that admits only correctly signed requests
///
/// Parses the JSON body as a parameter set, reads the `signature`,
/// `timestamp` and `token` headers, recomputes the signature with the
/// state's secret for the request path, and rejects mismatches with
/// 401. A missing `token` header verifies as empty text, matching the
/// client's behavior when no session exists.
///
/// Bodies are expected uncompressed; decompress gzip-encoded paths in
/// middleware before this extractor runs.
///
/// # Example
///
/// ```ignore
/// use axum::{routing::post, Router};
/// use signet_core::SecretTable;
/// use signet_http::{VerifiedParams, Verifier};
///
/// async fn echo(VerifiedParams(params): VerifiedParams) {
///     // params passed signature verification
/// }
///
/// let app = Router::new()
///     .route("/v1/echo", post(echo))
///     .with_state(Verifier::new(SecretTable::new().with("/v1/echo", "s")));
/// ```
pub struct VerifiedParams(pub ParameterSet);

fn header_text(headers: &HeaderMap, name: &'static str) -> Result<String, HttpError> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .ok_or(HttpError::MissingHeader(name))
}

#[async_trait]
impl<S> FromRequest<S> for VerifiedParams
where
    S: Send + Sync,
    Verifier: FromRef<S>,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let verifier = Verifier::from_ref(state);
        let path = req.uri().path().to_string();

        let signature = header_text(req.headers(), "signature")?;
        let timestamp = header_text(req.headers(), "timestamp")?;
        let token = header_text(req.headers(), "token").unwrap_or_default();

        let Json(params) = Json::<ParameterSet>::from_request(req, state)
            .await
            .map_err(|e| HttpError::Parse(e.to_string()))?;

        if !verifier.verify(&params, &timestamp, &token, &path, &signature) {
            return Err(HttpError::InvalidSignature);
        }

        Ok(VerifiedParams(params))
    }
}
