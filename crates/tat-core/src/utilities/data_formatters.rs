//! Data formatting helpers.
//!
//! Report dates are rendered as `DD-MMM-YYYY` (e.g. `03-Mar-2025`), the
//! format the data-entry template asks for.

use super::data_parsers::MONTH_NAMES;

/// Three-letter abbreviation for month `m` (1–12).
///
/// # Panics
/// Panics if `m` is outside 1–12.
pub fn month_abbreviation(m: u8) -> &'static str {
    &MONTH_NAMES[m as usize - 1][..3]
}

/// Format a `(year, month, day)` triple as `DD-MMM-YYYY`.
pub fn format_day_month_year(year: u16, month: u8, day: u8) -> String {
    format!("{day:02}-{}-{year:04}", month_abbreviation(month))
}

/// Format a `(year, month, day)` triple as `YYYY-MM-DD`.
pub fn format_iso(year: u16, month: u8, day: u8) -> String {
    format!("{year:04}-{month:02}-{day:02}")
}

/// Return the English ordinal suffix for `n` (e.g. `1` → `"st"`, `2` → `"nd"`).
pub fn ordinal_suffix(n: u32) -> &'static str {
    match n % 100 {
        11..=13 => "th",
        _ => match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

/// Format a number with its ordinal suffix (e.g. `1` → `"1st"`, `22` → `"22nd"`).
pub fn format_ordinal(n: u32) -> String {
    format!("{n}{}", ordinal_suffix(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_day_month_year() {
        assert_eq!(format_day_month_year(2025, 3, 3), "03-Mar-2025");
        assert_eq!(format_day_month_year(2025, 12, 25), "25-Dec-2025");
    }

    #[test]
    fn test_format_iso() {
        assert_eq!(format_iso(2025, 1, 26), "2025-01-26");
    }

    #[test]
    fn test_ordinal() {
        assert_eq!(format_ordinal(1), "1st");
        assert_eq!(format_ordinal(2), "2nd");
        assert_eq!(format_ordinal(3), "3rd");
        assert_eq!(format_ordinal(4), "4th");
        assert_eq!(format_ordinal(11), "11th");
        assert_eq!(format_ordinal(22), "22nd");
    }
}
