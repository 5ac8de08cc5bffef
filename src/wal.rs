//! # WAL Position Parsing
//!
//! PostgreSQL reports write-ahead-log locations as a two-part hexadecimal
//! string such as `16/A0` (high segment id, low byte offset). Comparing
//! positions across nodes requires the numeric pair, not the raw string,
//! so the raw form is decoded once at collection time and published as
//! plain integers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A decoded WAL location. Each component fits in 32 bits; they are held
/// as `u64` to match the published integer encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WalPosition {
    pub xlog: u64,
    pub offset: u64,
}

/// Failure to decode a raw WAL location string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WalParseError {
    #[error("WAL location `{0}` is missing the `/` separator")]
    MissingSeparator(String),
    #[error("WAL location `{raw}` has a malformed {part} component")]
    InvalidComponent { raw: String, part: &'static str },
}

impl WalPosition {
    /// Decode a raw `H/L` location string.
    ///
    /// Both components must be non-empty hexadecimal values within the
    /// 32-bit unsigned range. Anything else fails; there is no zero
    /// fallback for malformed input.
    pub fn parse(raw: &str) -> Result<Self, WalParseError> {
        let (high, low) = raw
            .split_once('/')
            .ok_or_else(|| WalParseError::MissingSeparator(raw.to_string()))?;

        let xlog = parse_component(raw, high, "xlog")?;
        let offset = parse_component(raw, low, "offset")?;

        Ok(Self { xlog, offset })
    }
}

fn parse_component(raw: &str, component: &str, part: &'static str) -> Result<u64, WalParseError> {
    u32::from_str_radix(component, 16)
        .map(u64::from)
        .map_err(|_| WalParseError::InvalidComponent {
            raw: raw.to_string(),
            part,
        })
}

impl fmt::Display for WalPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}/{:X}", self.xlog, self.offset)
    }
}
