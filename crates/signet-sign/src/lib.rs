//! # Signet Sign
//!
//! Deterministic canonicalization and request signing.
//!
//! This crate provides:
//! - Canonical string construction from a parameter set
//! - The MD5 hex digest used as the signature wire format
//! - Signature computation and constant-time verification
//!
//! ## Canonical form rules
//!
//! 1. Entries ordered by key, byte-wise ascending
//! 2. Each entry contributes `key` immediately followed by the value's
//!    text form, with **no delimiter**
//! 3. Scalars render bare; lists and maps render as compact JSON
//! 4. The empty set canonicalizes to the empty string
//!
//! ## Signature formula
//!
//! ```text
//! raw = base64(timestamp_text) ++ token ++ secret ++ canonical
//! signature = md5_hex(strip(raw, '[' ']' '"'))
//! ```
//!
//! The bracket/quote stripping is a legacy of how complex values were
//! once stringified. It is part of the wire contract - deployed servers
//! reproduce it when they verify - so it is preserved exactly.
//!
//! ## Example
//!
//! ```rust
//! use signet_core::{ParameterSet, Timestamp};
//! use signet_sign::compute;
//!
//! let params = ParameterSet::new().with("b", "2").with("a", "1");
//! let ts = Timestamp::from_unix_seconds(100);
//!
//! let signature = compute(&params, ts.as_str(), "T", "S");
//! assert_eq!(signature.as_str(), "1597152c2e227eac82318c3953ebb258");
//! ```

mod canonical;
mod digest;
mod error;
mod signer;

pub use canonical::*;
pub use digest::*;
pub use error::*;
pub use signer::*;
