//! Trezor Safe 5 layout.
//!
//! The Safe 5 paginates calldata into fixed byte windows: five 9-byte rows
//! plus a 7-byte footer row on page 1, then a 7-byte header row, four
//! 9-byte rows and a 7-byte footer row on every later page. Rows keep their
//! leading zeros; nothing is trimmed or padded.

use tracing::debug;

use crate::calldata::Calldata;

use super::ScreenFormat;

/// Full-width row, in bytes
const WIDE_WINDOW_BYTES: usize = 9;
/// Header/footer row, in bytes
const NARROW_WINDOW_BYTES: usize = 7;
/// Wide rows on page 1
const FIRST_PAGE_WIDE_ROWS: usize = 5;
/// Wide rows on later pages
const LATER_PAGE_WIDE_ROWS: usize = 4;

/// Trezor Safe 5 screen layout
#[derive(Debug, Clone, Copy, Default)]
pub struct TrezorSafe5;

impl ScreenFormat for TrezorSafe5 {
    fn device_name(&self) -> &'static str {
        "Trezor Safe 5"
    }

    fn render(&self, calldata: &Calldata) -> String {
        debug!(
            "Rendering Trezor Safe 5 layout ({} bytes)",
            calldata.byte_count()
        );

        let mut lines = vec!["\n\nTrezor Format:\n".to_string()];
        lines.push(format!("Size: {} bytes\n", calldata.byte_count()));

        let mut cursor = WindowCursor::new(calldata);
        let mut page = 1;

        lines.push(format!("Page {}:\n", page));
        page += 1;

        for _ in 0..FIRST_PAGE_WIDE_ROWS {
            if cursor.exhausted() {
                break;
            }
            lines.push(cursor.take(WIDE_WINDOW_BYTES).to_string());
        }
        if !cursor.exhausted() {
            lines.push(cursor.take(NARROW_WINDOW_BYTES).to_string());
        }

        while !cursor.exhausted() {
            lines.push(format!("\nPage {}:\n", page));
            page += 1;

            lines.push(cursor.take(NARROW_WINDOW_BYTES).to_string());
            for _ in 0..LATER_PAGE_WIDE_ROWS {
                if cursor.exhausted() {
                    break;
                }
                lines.push(cursor.take(WIDE_WINDOW_BYTES).to_string());
            }
            if !cursor.exhausted() {
                lines.push(cursor.take(NARROW_WINDOW_BYTES).to_string());
            }
        }

        lines.join("\n")
    }
}

/// Left-to-right walk over the byte tokens, no overlap, no gaps.
struct WindowCursor<'a> {
    calldata: &'a Calldata,
    offset: usize,
}

impl<'a> WindowCursor<'a> {
    fn new(calldata: &'a Calldata) -> Self {
        Self {
            calldata,
            offset: 0,
        }
    }

    fn exhausted(&self) -> bool {
        self.offset >= self.calldata.byte_count()
    }

    /// Take up to `max_bytes` bytes as one raw hex window.
    fn take(&mut self, max_bytes: usize) -> &'a str {
        let end = (self.offset + max_bytes).min(self.calldata.byte_count());
        let window = self.calldata.byte_range(self.offset, end);
        self.offset = end;
        window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(hex: &str) -> String {
        TrezorSafe5.render(&Calldata::parse(hex).unwrap())
    }

    /// Counting byte values 00, 01, 02, ... so window boundaries are visible.
    fn counting_hex(n: usize) -> String {
        (0..n).map(|i| format!("{:02x}", i)).collect()
    }

    #[test]
    fn test_window_cursor_caps_at_remaining() {
        let calldata = Calldata::parse("aabbcc").unwrap();
        let mut cursor = WindowCursor::new(&calldata);
        assert_eq!(cursor.take(9), "aabbcc");
        assert!(cursor.exhausted());
    }

    #[test]
    fn test_render_empty_calldata() {
        assert_eq!(render("0x"), "\n\nTrezor Format:\n\nSize: 0 bytes\n\nPage 1:\n");
    }

    #[test]
    fn test_render_short_first_window() {
        assert_eq!(
            render("0xabcd"),
            "\n\nTrezor Format:\n\nSize: 2 bytes\n\nPage 1:\n\nabcd"
        );
    }

    #[test]
    fn test_render_fifty_bytes_stays_on_page_one() {
        // 5 wide rows cover 45 bytes; the last 5 ride in a short footer row
        let report = render(&counting_hex(50));
        let expected = "\n\nTrezor Format:\n\nSize: 50 bytes\n\nPage 1:\n\n\
                        000102030405060708\n\
                        090a0b0c0d0e0f1011\n\
                        12131415161718191a\n\
                        1b1c1d1e1f20212223\n\
                        2425262728292a2b2c\n\
                        2d2e2f3031";
        assert_eq!(report, expected);
        assert!(!report.contains("Page 2"));
    }

    #[test]
    fn test_render_fifty_two_bytes_fills_page_one() {
        // 5 * 9 + 7 = 52: the schedule comes out exactly even
        let report = render(&counting_hex(52));
        assert!(report.ends_with("2d2e2f30313233"));
        assert!(!report.contains("Page 2"));
    }

    #[test]
    fn test_render_spills_onto_second_page() {
        // 60 bytes: 52 on page 1, then a 7-byte header row and 1 leftover
        let report = render(&counting_hex(60));
        assert!(report.contains("\nPage 2:\n"));
        assert!(report.ends_with("3435363738393a\n3b"));
        assert!(!report.contains("Page 3"));
    }

    #[test]
    fn test_render_fills_second_page_exactly() {
        // Later pages hold 7 + 4 * 9 + 7 = 50 bytes; 102 ends page 2 clean
        let report = render(&counting_hex(102));
        assert!(report.contains("\nPage 2:\n"));
        assert!(!report.contains("Page 3"));
    }

    #[test]
    fn test_render_preserves_leading_zeros() {
        let report = render("0x000000000000000000");
        assert!(report.ends_with("000000000000000000"));
    }
}
