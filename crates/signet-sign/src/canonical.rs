//! Canonical string construction

use crate::error::SignError;
use signet_core::ParameterSet;

/// Build the canonical string for a parameter set
///
/// # Rules
///
/// - Entries ordered by key, byte-wise ascending
/// - Each entry contributes `key` immediately followed by the value's
///   text form, with no delimiter
/// - The empty set canonicalizes to the empty string
///
/// Adjacent entries are not delimited, so distinct parameter sets can
/// collide: `{"ab":"c"}` and `{"a":"bc"}` both canonicalize to `"abc"`.
/// Deployed servers verify against exactly this construction, so the
/// collision stays.
///
/// # Errors
///
/// Returns `SignError::Render` if a list or map value cannot be encoded.
///
/// # Example
///
/// ```rust
/// use signet_core::ParameterSet;
/// use signet_sign::try_canonicalize;
///
/// let params = ParameterSet::new().with("b", "2").with("a", "1");
/// assert_eq!(try_canonicalize(&params).unwrap(), "a1b2");
/// ```
pub fn try_canonicalize(params: &ParameterSet) -> Result<String, SignError> {
    let mut out = String::new();
    for (key, value) in params.iter() {
        out.push_str(key);
        out.push_str(&value.text_form()?);
    }
    Ok(out)
}

/// Build the canonical string, degrading to empty on failure
///
/// Signing must never block request construction: a parameter set that
/// fails to render contributes nothing to the signature, and the
/// request goes out with a signature the server will reject.
pub fn canonicalize(params: &ParameterSet) -> String {
    try_canonicalize(params).unwrap_or_default()
}
