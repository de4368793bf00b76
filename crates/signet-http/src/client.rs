//! Reqwest-based signed HTTP client

use crate::config::ClientConfig;
use crate::error::HttpError;
use crate::request::RequestBuilder;
use reqwest::{Client, Method};
use std::sync::Arc;

/// HTTP client whose requests are signed on dispatch
///
/// Every request built through this client is stamped with the common
/// parameter set, a zero-padded timestamp, and a `signature` header
/// computed over exactly what goes on the wire.
///
/// # Example
///
/// ```ignore
/// use signet_http::{ClientConfig, SignetClient};
///
/// let client = SignetClient::new(ClientConfig::builder("http://localhost:8080").build())?;
/// let response = client.post("/v1/echo").param("a", "1").send().await?;
/// ```
#[derive(Debug, Clone)]
pub struct SignetClient {
    http: Client,
    config: Arc<ClientConfig>,
}

impl SignetClient {
    /// Create a client from configuration
    ///
    /// # Errors
    ///
    /// Returns `HttpError::Request` if the underlying client cannot be
    /// built.
    pub fn new(config: ClientConfig) -> Result<Self, HttpError> {
        let http = Client::builder()
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(HttpError::Request)?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    /// Create a client over an existing `reqwest::Client`
    pub fn with_client(http: Client, config: ClientConfig) -> Self {
        Self {
            http,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Start building a request for `path`
    pub fn request(&self, method: Method, path: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(self.http.clone(), Arc::clone(&self.config), method, path.into())
    }

    pub fn get(&self, path: impl Into<String>) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: impl Into<String>) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    pub fn put(&self, path: impl Into<String>) -> RequestBuilder {
        self.request(Method::PUT, path)
    }
}
