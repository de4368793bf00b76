//! Signature computation and verification

use crate::canonical::canonicalize;
use crate::digest::{constant_time_compare, md5_hex};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use signet_core::{ParameterSet, SigningContext, Timestamp};
use std::fmt::{Display, Formatter};

/// A computed request signature: 32 lowercase hex characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature(String);

impl Signature {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute a signature from fully explicit inputs
///
/// The raw hash input is `base64(timestamp_text) ++ token ++ secret ++
/// canonical` with no delimiters, with every literal `[`, `]` and `"`
/// removed before hashing. The removal happens here and only here -
/// canonical strings keep their brackets and quotes - because that is
/// what deployed servers reproduce when they verify.
///
/// A parameter set that fails to render degrades to an empty canonical
/// string, and empty token/secret values are hashed as-is: the signature
/// is always produced, it just fails verification server-side.
///
/// `timestamp_text` is the exact text transmitted in the `timestamp`
/// header; on the verifying side it must be taken from the wire
/// verbatim, not re-rendered.
pub fn compute(
    params: &ParameterSet,
    timestamp_text: &str,
    token: &str,
    secret: &str,
) -> Signature {
    let canonical = canonicalize(params);

    let mut raw = String::with_capacity(24 + token.len() + secret.len() + canonical.len());
    raw.push_str(&BASE64.encode(timestamp_text.as_bytes()));
    raw.push_str(token);
    raw.push_str(secret);
    raw.push_str(&canonical);

    let cleaned: String = raw.chars().filter(|c| !matches!(c, '[' | ']' | '"')).collect();

    Signature(md5_hex(cleaned.as_bytes()))
}

/// Sign an outgoing request using injected collaborators
///
/// `path` selects the per-endpoint secret. For fixed inputs the result
/// is deterministic, so a server holding the same secret can recompute
/// and compare.
///
/// # Example
///
/// ```rust
/// use signet_core::{ParameterSet, SecretTable, SigningContext, Timestamp};
/// use signet_sign::sign;
///
/// let ctx = SigningContext::new(
///     "T".to_string(),
///     SecretTable::new().with("/v1/login", "S"),
/// );
/// let params = ParameterSet::new().with("a", "1").with("b", "2");
/// let ts = Timestamp::from_unix_seconds(100);
///
/// let signature = sign(&params, &ts, "/v1/login", &ctx);
/// assert_eq!(signature.as_str().len(), 32);
/// ```
pub fn sign(
    params: &ParameterSet,
    timestamp: &Timestamp,
    path: &str,
    ctx: &SigningContext,
) -> Signature {
    compute(params, timestamp.as_str(), &ctx.token(), &ctx.secret_for(path))
}

/// Recompute a signature and compare it to a claimed one in constant time
///
/// `timestamp_text` and `token` are the header values exactly as
/// received; `secret` is the verifier's own secret for the request path.
pub fn verify(
    params: &ParameterSet,
    timestamp_text: &str,
    token: &str,
    secret: &str,
    claimed: &str,
) -> bool {
    let expected = compute(params, timestamp_text, token, secret);
    constant_time_compare(expected.as_str(), claimed)
}
