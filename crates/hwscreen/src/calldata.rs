//! Calldata normalization.
//!
//! Converts a raw hex string (with or without `0x` prefix) into the ordered
//! sequence of two-character byte tokens that the screen formatters walk.

use crate::error::{Error, Result};

/// Normalized ABI calldata: an even-length ASCII hex payload.
///
/// Digit case is preserved exactly as entered; the formatters echo the
/// user's hex back at them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calldata {
    hex: String,
}

impl Calldata {
    /// Parse a hex string into calldata.
    ///
    /// Strips a literal leading `"0x"` (case-sensitive), then requires an
    /// even number of ASCII hex digits. An empty payload is valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use hwscreen::Calldata;
    ///
    /// let calldata = Calldata::parse("0xa9059cbb").unwrap();
    /// assert_eq!(calldata.byte_count(), 4);
    /// assert!(Calldata::parse("0x123").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let hex = input.strip_prefix("0x").unwrap_or(input);

        if hex.len() % 2 != 0 {
            return Err(Error::InvalidHexLength { len: hex.len() });
        }

        if let Some((position, found)) = hex
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_hexdigit())
        {
            return Err(Error::InvalidHexDigit { position, found });
        }

        Ok(Self {
            hex: hex.to_string(),
        })
    }

    /// Number of bytes encoded by the payload.
    pub fn byte_count(&self) -> usize {
        self.hex.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.hex.is_empty()
    }

    /// The `i`-th two-character byte token.
    pub fn byte(&self, i: usize) -> &str {
        &self.hex[i * 2..i * 2 + 2]
    }

    /// The contiguous run of byte tokens `[start, end)` as one hex slice.
    pub fn byte_range(&self, start: usize, end: usize) -> &str {
        &self.hex[start * 2..end * 2]
    }
}
