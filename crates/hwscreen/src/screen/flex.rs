//! Ledger Flex layout.
//!
//! The Flex screen shows the 4-byte selector on its own line, then each
//! 32-byte word as up to four 8-byte groups with leading zeros trimmed.

use tracing::debug;

use crate::calldata::Calldata;

use super::ScreenFormat;

/// Selector width in bytes
const SELECTOR_BYTES: usize = 4;
/// Word width in bytes
const BLOCK_BYTES: usize = 32;
/// Group width within a word, in bytes
const SEGMENT_BYTES: usize = 8;

/// Ledger Flex screen layout
#[derive(Debug, Clone, Copy, Default)]
pub struct LedgerFlex;

impl ScreenFormat for LedgerFlex {
    fn device_name(&self) -> &'static str {
        "Ledger Flex"
    }

    fn render(&self, calldata: &Calldata) -> String {
        let total = calldata.byte_count();
        debug!("Rendering Ledger Flex layout ({} bytes)", total);

        let mut lines = vec!["\n\nLedger Flex Format:\n".to_string()];

        // The selector may be shorter than 4 bytes; no minimum is enforced.
        let selector_end = total.min(SELECTOR_BYTES);
        lines.push(calldata.byte_range(0, selector_end).to_string());

        let mut block_start = selector_end;
        while block_start < total {
            let block_end = (block_start + BLOCK_BYTES).min(total);
            let mut segments = Vec::new();

            let mut seg_start = block_start;
            while seg_start < block_end {
                let seg_end = (seg_start + SEGMENT_BYTES).min(block_end);
                segments.push(trim_segment(calldata.byte_range(seg_start, seg_end)));
                seg_start = seg_end;
            }

            lines.push(segments.join(":"));
            block_start = block_end;
        }

        lines.join("\n")
    }
}

/// Trim leading zeros from one group, keeping whole bytes.
///
/// An all-zero group collapses to `"00"`, never to the empty string. The
/// trim runs before the odd-length pad, so `"0001..."` trims to 13 digits
/// and then gets one zero back.
fn trim_segment(segment: &str) -> String {
    let trimmed = segment.trim_start_matches('0');
    if trimmed.is_empty() {
        "00".to_string()
    } else if trimmed.len() % 2 != 0 {
        format!("0{}", trimmed)
    } else {
        trimmed.to_string()
    }
}
