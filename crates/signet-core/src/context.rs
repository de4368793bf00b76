//! Signing collaborators: token, per-path secret, clock
//!
//! The signer reads all ambient state through these traits so that
//! nothing global is consulted at signing time. A [`SigningContext`]
//! bundles the three collaborators and is passed explicitly wherever a
//! signature is computed.

use chrono::Utc;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Supplies the current auth token
///
/// Returns empty text when no session exists; the signature is still
/// computed and simply fails server-side verification.
pub trait TokenProvider: Send + Sync {
    fn token(&self) -> String;
}

/// Supplies the per-endpoint signing secret
pub trait SecretProvider: Send + Sync {
    /// Secret for `path`, or empty text for unknown paths
    fn secret_for(&self, path: &str) -> String;
}

/// Clock source for request timestamps
pub trait Clock: Send + Sync {
    fn unix_seconds(&self) -> u64;
}

/// A fixed token
impl TokenProvider for String {
    fn token(&self) -> String {
        self.clone()
    }
}

/// Static path-to-secret table
///
/// # Example
///
/// ```rust
/// use signet_core::{SecretProvider, SecretTable};
///
/// let table = SecretTable::new().with("/v1/login", "s3cret");
/// assert_eq!(table.secret_for("/v1/login"), "s3cret");
/// assert_eq!(table.secret_for("/unknown"), "");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SecretTable(HashMap<String, String>);

impl SecretTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: impl Into<String>, secret: impl Into<String>) -> Self {
        self.0.insert(path.into(), secret.into());
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, secret: impl Into<String>) {
        self.0.insert(path.into(), secret.into());
    }
}

impl SecretProvider for SecretTable {
    fn secret_for(&self, path: &str) -> String {
        self.0.get(path).cloned().unwrap_or_default()
    }
}

/// Wall-clock seconds backed by chrono
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_seconds(&self) -> u64 {
        // Negative timestamps predate 1970 and cannot occur on a sane
        // clock; clamp instead of panicking.
        Utc::now().timestamp().max(0) as u64
    }
}

struct TokenFn<F>(F);

impl<F> TokenProvider for TokenFn<F>
where
    F: Fn() -> String + Send + Sync,
{
    fn token(&self) -> String {
        (self.0)()
    }
}

struct SecretFn<F>(F);

impl<F> SecretProvider for SecretFn<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn secret_for(&self, path: &str) -> String {
        (self.0)(path)
    }
}

/// The injected collaborators the signer reads
///
/// Cloning is cheap; the providers are shared.
#[derive(Clone)]
pub struct SigningContext {
    token: Arc<dyn TokenProvider>,
    secrets: Arc<dyn SecretProvider>,
    clock: Arc<dyn Clock>,
}

impl SigningContext {
    /// Create a context from a token provider and a secret provider,
    /// using the system clock
    pub fn new(
        token: impl TokenProvider + 'static,
        secrets: impl SecretProvider + 'static,
    ) -> Self {
        Self {
            token: Arc::new(token),
            secrets: Arc::new(secrets),
            clock: Arc::new(SystemClock),
        }
    }

    /// Create a context from plain functions
    ///
    /// # Example
    ///
    /// ```rust
    /// use signet_core::SigningContext;
    ///
    /// let ctx = SigningContext::from_fns(
    ///     || "tok".to_string(),
    ///     |path| format!("secret-for-{}", path),
    /// );
    /// assert_eq!(ctx.secret_for("/a"), "secret-for-/a");
    /// ```
    pub fn from_fns<T, S>(token: T, secrets: S) -> Self
    where
        T: Fn() -> String + Send + Sync + 'static,
        S: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self::new(TokenFn(token), SecretFn(secrets))
    }

    /// A context with no token and no secrets
    ///
    /// Requests are still signed; servers that verify will reject them.
    pub fn anonymous() -> Self {
        Self::new(String::new(), SecretTable::new())
    }

    /// Replace the clock, mainly for tests
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn token(&self) -> String {
        self.token.token()
    }

    pub fn secret_for(&self, path: &str) -> String {
        self.secrets.secret_for(path)
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}

impl fmt::Debug for SigningContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningContext").finish_non_exhaustive()
    }
}
