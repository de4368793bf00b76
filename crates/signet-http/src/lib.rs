//! # Signet HTTP Transport
//!
//! HTTP transport for signed requests.
//!
//! This crate provides:
//! - A reqwest-based client whose requests are automatically stamped
//!   with common parameters, a timestamp, and a `signature` header
//! - Client configuration with explicit collaborators
//! - Gzip request-body encoding for configured paths
//! - An axum extractor that verifies incoming signed requests
//!
//! ## Client example
//!
//! ```ignore
//! use signet_core::{DeviceProfile, SecretTable, SigningContext};
//! use signet_http::{ClientConfig, SignetClient};
//!
//! let config = ClientConfig::builder("https://api.example.com")
//!     .signing(SigningContext::new(
//!         "session-token".to_string(),
//!         SecretTable::new().with("/v1/login", "s3cret"),
//!     ))
//!     .device(DeviceProfile {
//!         os_name: "android".to_string(),
//!         ..DeviceProfile::default()
//!     })
//!     .build();
//!
//! let client = SignetClient::new(config)?;
//!
//! #[derive(serde::Deserialize, Default)]
//! struct LoginData { uid: String }
//!
//! let data: LoginData = client
//!     .post("/v1/login")
//!     .param("phone", "13800000000")
//!     .param("code", "1234")
//!     .fetch()
//!     .await?;
//! ```
//!
//! ## Server example
//!
//! ```ignore
//! use axum::{routing::post, Router};
//! use signet_core::SecretTable;
//! use signet_http::{Verifier, VerifiedParams};
//!
//! async fn handler(VerifiedParams(params): VerifiedParams) {
//!     // params passed signature verification
//! }
//!
//! let verifier = Verifier::new(SecretTable::new().with("/v1/echo", "s3cret"));
//! let app = Router::new()
//!     .route("/v1/echo", post(handler))
//!     .with_state(verifier);
//! ```

mod client;
mod compress;
mod config;
mod error;
mod extractors;
mod request;

pub use client::SignetClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{ErrorResponse, HttpError};
pub use extractors::{VerifiedParams, Verifier};
pub use request::RequestBuilder;
