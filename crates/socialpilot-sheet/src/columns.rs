//! Canonical column layout of the posting sheet.
//!
//! Both the read path (`list_rows`) and the write path (`update_row`) go
//! through these offsets. Changing the sheet layout means changing exactly
//! this module.

/// Stable external identifier.
pub const ID: usize = 0;
/// Human-readable media file name.
pub const MEDIA_NAME: usize = 1;
/// Opaque media locator resolved by the drive client.
pub const MEDIA_REFERENCE: usize = 2;
pub const TITLE: usize = 3;
pub const DESCRIPTION: usize = 4;
pub const TAGS: usize = 5;
/// Comma-separated target platform identifiers.
pub const PLATFORMS: usize = 6;
pub const STATUS: usize = 7;
/// ISO-like schedule timestamp, one cell.
pub const SCHEDULED_AT: usize = 8;
pub const RESULT_URL: usize = 9;
pub const INSTAGRAM_URL: usize = 10;
pub const TIKTOK_URL: usize = 11;
pub const NOTES: usize = 12;

/// First sheet row holding data (row 1 is headers).
pub const DATA_START_ROW: u32 = 2;

/// A1-notation column letter for a 0-indexed offset. Only defined for the
/// single-letter columns this sheet uses.
pub fn letter(index: usize) -> char {
    debug_assert!(index < 26);
    (b'A' + index as u8) as char
}

/// Read range covering all data columns of a tab.
pub fn read_range(tab: &str) -> String {
    format!("{}!A{}:{}", tab, DATA_START_ROW, letter(NOTES))
}

/// A1 reference of a single cell.
pub fn cell(tab: &str, index: usize, row: u32) -> String {
    format!("{}!{}{}", tab, letter(index), row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_range_covers_all_columns() {
        assert_eq!(read_range("Sheet1"), "Sheet1!A2:M");
    }

    #[test]
    fn cell_reference_uses_column_letter() {
        assert_eq!(cell("Sheet1", STATUS, 7), "Sheet1!H7");
        assert_eq!(cell("Sheet1", RESULT_URL, 2), "Sheet1!J2");
        assert_eq!(cell("Sheet1", NOTES, 42), "Sheet1!M42");
    }
}
