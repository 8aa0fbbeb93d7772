//! # hwscreen
//!
//! Preview how ABI-encoded calldata is laid out on hardware wallet screens.
//!
//! This crate provides:
//! - Calldata normalization from raw hex strings
//! - The Ledger Flex screen layout (colon-separated trimmed groups)
//! - The Trezor Safe 5 screen layout (fixed paginated byte windows)
//!
//! No device communication happens here; both formatters are pure functions
//! over the normalized byte sequence.
//!
//! ## Usage
//!
//! ```
//! use hwscreen::{Calldata, LedgerFlex, ScreenFormat};
//!
//! let calldata = Calldata::parse("0xa9059cbb").unwrap();
//! let report = LedgerFlex.render(&calldata);
//! assert!(report.contains("a9059cbb"));
//! ```

pub mod calldata;
pub mod error;
pub mod screen;

pub use calldata::Calldata;
pub use error::{Error, Result};
pub use screen::{LedgerFlex, ScreenFormat, TrezorSafe5};
