//! Data parsing helpers.
//!
//! Dates cross the system boundary as ISO 8601 calendar-date strings
//! (`YYYY-MM-DD`).  The parser here only checks the shape; range checks
//! belong to the `Date` constructor.

/// Parse a date string in ISO 8601 extended format (`YYYY-MM-DD`).
///
/// Exactly four year digits, two month digits, and two day digits are
/// required; surrounding whitespace is ignored.  Returns `(year, month, day)`
/// on success.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    let s = s.trim();
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits = |range: std::ops::Range<usize>| -> Option<u32> {
        let part = &s[range];
        if !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        part.parse().ok()
    };
    let year = digits(0..4)?;
    let month = digits(5..7)?;
    let day = digits(8..10)?;
    Some((year as u16, month as u8, day as u8))
}
