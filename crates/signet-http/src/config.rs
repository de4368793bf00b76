//! Client configuration

use signet_core::{DeviceProfile, ParamValue, ParameterSet, SigningContext};
use std::collections::HashMap;
use std::time::Duration;

/// Configuration for a [`crate::SignetClient`]
///
/// Built once at startup and shared by every request. All collaborators
/// are explicit; nothing is read from process-global state.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub signing: SigningContext,
    pub device: DeviceProfile,
    /// Headers added to every request
    pub default_headers: HashMap<String, String>,
    /// Application-level parameters merged into every request body
    pub extra_params: ParameterSet,
    /// Paths whose request bodies are gzip-compressed
    pub gzip_paths: Vec<String>,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Start building a configuration for `base_url`
    pub fn builder(base_url: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder {
            base_url: base_url.into(),
            signing: SigningContext::anonymous(),
            device: DeviceProfile::default(),
            default_headers: HashMap::new(),
            extra_params: ParameterSet::new(),
            gzip_paths: Vec::new(),
            timeout: Duration::from_secs(60),
        }
    }

    pub fn gzip_enabled(&self, path: &str) -> bool {
        self.gzip_paths.iter().any(|p| p == path)
    }
}

/// Builder for [`ClientConfig`]
#[derive(Debug)]
pub struct ClientConfigBuilder {
    base_url: String,
    signing: SigningContext,
    device: DeviceProfile,
    default_headers: HashMap<String, String>,
    extra_params: ParameterSet,
    gzip_paths: Vec<String>,
    timeout: Duration,
}

impl ClientConfigBuilder {
    pub fn signing(mut self, signing: SigningContext) -> Self {
        self.signing = signing;
        self
    }

    pub fn device(mut self, device: DeviceProfile) -> Self {
        self.device = device;
        self
    }

    /// Add a header sent with every request
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    /// Add a parameter merged into every request body
    pub fn extra_param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.extra_params.insert(key, value);
        self
    }

    /// Enable gzip request bodies for a path
    pub fn gzip_path(mut self, path: impl Into<String>) -> Self {
        self.gzip_paths.push(path.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url,
            signing: self.signing,
            device: self.device,
            default_headers: self.default_headers,
            extra_params: self.extra_params,
            gzip_paths: self.gzip_paths,
            timeout: self.timeout,
        }
    }
}
