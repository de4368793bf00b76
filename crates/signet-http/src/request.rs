//! Fluent request construction and the signed dispatch pipeline

use crate::compress::gzip_bytes;
use crate::config::ClientConfig;
use crate::error::HttpError;
use reqwest::header::{CONTENT_ENCODING, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use signet_core::{ApiEnvelope, ParamValue, ParameterSet, Timestamp};
use signet_sign::sign;
use std::sync::Arc;

const JSON_UTF8: &str = "application/json; charset=utf-8";

/// Builder for a single signed request
///
/// Dispatching runs the full pipeline: merge the common parameters into
/// the request's own, stamp a timestamp, sign, set headers, encode the
/// body, and send.
pub struct RequestBuilder {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
    method: Method,
    path: String,
    params: ParameterSet,
    headers: Vec<(String, String)>,
}

impl RequestBuilder {
    pub(crate) fn new(
        http: reqwest::Client,
        config: Arc<ClientConfig>,
        method: Method,
        path: String,
    ) -> Self {
        Self {
            http,
            config,
            method,
            path,
            params: ParameterSet::new(),
            headers: Vec::new(),
        }
    }

    /// Add one request parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key, value);
        self
    }

    /// Add many parameters at once
    pub fn params<I, K, V>(mut self, iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ParamValue>,
    {
        self.params.extend(iter);
        self
    }

    /// Add a per-request header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// The full parameter set as it will be signed and sent
    ///
    /// Request parameters first, then the device profile, then the
    /// configured extra parameters; later entries win on key clashes.
    fn merged_params(&self) -> ParameterSet {
        let mut merged = self.params.clone();
        self.config.device.apply_to(&mut merged);
        merged.merge(&self.config.extra_params);
        merged
    }

    fn build_url(&self) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        )
    }

    /// Dispatch and return the raw response
    ///
    /// # Errors
    ///
    /// Returns `HttpError` if the body cannot be encoded or the request
    /// fails at the transport level. Signing itself never fails.
    pub async fn send(self) -> Result<reqwest::Response, HttpError> {
        let params = self.merged_params();

        let timestamp = Timestamp::now(self.config.signing.clock());
        let signature = sign(&params, &timestamp, &self.path, &self.config.signing);

        tracing::debug!(
            method = %self.method,
            path = %self.path,
            timestamp = %timestamp,
            params = params.len(),
            "dispatching signed request"
        );

        let mut req = self
            .http
            .request(self.method.clone(), self.build_url())
            .header("token", self.config.signing.token())
            // The header must carry the exact text that was signed.
            .header("timestamp", timestamp.as_str())
            .header("osName", self.config.device.os_name.as_str())
            .header(CONTENT_TYPE, JSON_UTF8)
            .header("signature", signature.as_str());

        for (name, value) in &self.config.default_headers {
            req = req.header(name.as_str(), value.as_str());
        }
        for (name, value) in &self.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        if self.method == Method::GET {
            let pairs: Vec<(String, String)> = params
                .iter()
                .map(|(k, v)| (k.clone(), v.text_form().unwrap_or_default()))
                .collect();
            req = req.query(&pairs);
        } else {
            let body = serde_json::to_vec(&params).map_err(HttpError::Encode)?;
            if self.config.gzip_enabled(&self.path) {
                req = req
                    .header(CONTENT_ENCODING, "gzip")
                    .body(gzip_bytes(&body)?);
            } else {
                req = req.body(body);
            }
        }

        req.send().await.map_err(HttpError::Request)
    }

    /// Dispatch and decode the `{ code, message, data }` envelope
    ///
    /// Non-zero envelope codes surface as `HttpError::Api`. A missing
    /// `data` field on success decodes to `T::default()`.
    pub async fn fetch<T>(self) -> Result<T, HttpError>
    where
        T: DeserializeOwned + Default,
    {
        let response = self.send().await?;
        let envelope: ApiEnvelope<T> = response.json().await.map_err(HttpError::Request)?;
        envelope.into_result().map_err(HttpError::Api)
    }
}
