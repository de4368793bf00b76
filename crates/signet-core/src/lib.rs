//! # Signet Core
//!
//! Shared types for the signet signed-request client.
//!
//! This crate provides:
//! - Tagged parameter values and parameter sets
//! - Zero-padded request timestamps
//! - Signing collaborators (token provider, per-path secret lookup, clock)
//! - Device profile fields merged into every request
//! - The `{ code, message, data }` response envelope
//!
//! ## Example
//!
//! ```rust
//! use signet_core::{ParameterSet, SigningContext, Timestamp};
//!
//! let mut params = ParameterSet::new();
//! params.insert("phone", "13800000000");
//! params.insert("retries", 3);
//!
//! let ctx = SigningContext::anonymous();
//! let ts = Timestamp::now(ctx.clock());
//! assert_eq!(ts.as_str().len(), 10);
//! ```

pub mod context;
pub mod envelope;
pub mod error;
pub mod identity;
pub mod params;
pub mod timestamp;

pub use context::*;
pub use envelope::*;
pub use error::*;
pub use identity::*;
pub use params::*;
pub use timestamp::*;
