//! Device screen formatters.
//!
//! Each formatter turns normalized calldata into the text a specific
//! hardware wallet shows during transaction review.

mod flex;
mod safe5;

pub use flex::LedgerFlex;
pub use safe5::TrezorSafe5;

use crate::calldata::Calldata;

/// Trait for device screen layouts
///
/// Provides a common interface for the supported device families.
pub trait ScreenFormat {
    /// Device family name, used in log output
    fn device_name(&self) -> &'static str;

    /// Render the full review text for the given calldata
    ///
    /// Lines are joined with `\n` and carry no trailing newline; the caller
    /// owns the final write.
    fn render(&self, calldata: &Calldata) -> String;
}
