//! Zero-padded unix-second timestamps
//!
//! The timestamp text is hashed into the signature and transmitted in
//! the `timestamp` header. The two must be byte-identical or the server
//! rejects the request, so the text is fixed once at construction.

use crate::context::Clock;
use std::fmt::{Display, Formatter};

/// Seconds since the epoch, rendered zero-padded to 10 digits
///
/// # Example
///
/// ```rust
/// use signet_core::Timestamp;
///
/// let ts = Timestamp::from_unix_seconds(100);
/// assert_eq!(ts.as_str(), "0000000100");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Timestamp {
    seconds: u64,
    text: String,
}

impl Timestamp {
    /// Create a timestamp from a raw second count
    pub fn from_unix_seconds(seconds: u64) -> Self {
        Self {
            seconds,
            text: format!("{:010}", seconds),
        }
    }

    /// Read the current time from a clock
    pub fn now(clock: &dyn Clock) -> Self {
        Self::from_unix_seconds(clock.unix_seconds())
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    /// The exact text that is signed and transmitted
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_padding_to_ten_digits() {
        assert_eq!(Timestamp::from_unix_seconds(0).as_str(), "0000000000");
        assert_eq!(Timestamp::from_unix_seconds(100).as_str(), "0000000100");
        assert_eq!(Timestamp::from_unix_seconds(42).as_str(), "0000000042");
    }

    #[test]
    fn test_ten_digit_values_pass_through() {
        assert_eq!(
            Timestamp::from_unix_seconds(1_700_000_000).as_str(),
            "1700000000"
        );
    }

    #[test]
    fn test_width_grows_past_ten_digits() {
        // Padding is a minimum width, not a truncation.
        assert_eq!(
            Timestamp::from_unix_seconds(10_000_000_000).as_str(),
            "10000000000"
        );
    }

    #[test]
    fn test_display_matches_as_str() {
        let ts = Timestamp::from_unix_seconds(100);
        assert_eq!(ts.to_string(), ts.as_str());
    }

    #[test]
    fn test_now_uses_clock() {
        struct Fixed;
        impl Clock for Fixed {
            fn unix_seconds(&self) -> u64 {
                100
            }
        }

        let ts = Timestamp::now(&Fixed);
        assert_eq!(ts.as_str(), "0000000100");
        assert_eq!(ts.seconds(), 100);
    }
}
