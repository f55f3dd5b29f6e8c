//! Data parsing helpers.
//!
//! Spreadsheet exports carry dates in several textual shapes.  These
//! functions recognise each shape and return `(year, month, day)`; they do
//! **not** check that the triple names a real calendar day, which is the job
//! of the date type that consumes it.

/// English month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Look up a month by its English name or three-letter abbreviation
/// (case-insensitive).  Returns 1–12.
pub fn month_from_name(s: &str) -> Option<u8> {
    let s = s.trim().to_ascii_lowercase();
    if s.len() < 3 {
        return None;
    }
    MONTH_NAMES
        .iter()
        .position(|name| {
            let name = name.to_ascii_lowercase();
            name == s || (s.len() == 3 && name.starts_with(&s)) || (s == "sept" && name == "september")
        })
        .map(|i| i as u8 + 1)
}

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// A trailing time component (`YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DDTHH:MM:SS`)
/// is accepted and ignored.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    let date_part = s.trim().split(['T', ' ']).next()?;
    let parts: Vec<&str> = date_part.split('-').collect();
    if parts.len() != 3 || parts[0].len() != 4 {
        return None;
    }
    let year: u16 = parts[0].parse().ok()?;
    let month: u8 = parts[1].parse().ok()?;
    let day: u8 = parts[2].parse().ok()?;
    Some((year, month, day))
}

/// Parse a date string in `MM/DD/YYYY` format, month first.
///
/// `03/04/2025` is 4 March; `15/03/2025` has no month 15 and is rejected.
pub fn parse_date_slash(s: &str) -> Option<(u16, u8, u8)> {
    let s = s.trim();
    let parts: Vec<&str> = s.split('/').collect();
    if parts.len() != 3 || parts[2].len() != 4 {
        return None;
    }
    let month: u8 = parts[0].parse().ok()?;
    let day: u8 = parts[1].parse().ok()?;
    let year: u16 = parts[2].parse().ok()?;
    Some((year, month, day))
}

/// Parse a date string in `DD-MMM-YYYY` format (e.g. `03-Mar-2025`).
///
/// Spaces work as separators too, and the month may be spelled out.
pub fn parse_day_month_name(s: &str) -> Option<(u16, u8, u8)> {
    let s = s.trim();
    let parts: Vec<&str> = s
        .split(|c: char| c == '-' || c == ' ')
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() != 3 || parts[2].len() != 4 {
        return None;
    }
    let day: u8 = parts[0].parse().ok()?;
    let month = month_from_name(parts[1])?;
    let year: u16 = parts[2].parse().ok()?;
    Some((year, month, day))
}

/// Try every supported format in turn: ISO, day-month-name, then
/// month-first slashed.
///
/// Returns `None` for blank input or text matching no format.
pub fn parse_date(s: &str) -> Option<(u16, u8, u8)> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    parse_iso_date(s)
        .or_else(|| parse_day_month_name(s))
        .or_else(|| parse_date_slash(s))
}
