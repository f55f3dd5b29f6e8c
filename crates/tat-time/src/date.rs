//! `Date` type.
//!
//! Dates are stored as a serial number of days.  Serial 1 corresponds to
//! January 1, 1900, so the difference of two serials is the signed number of
//! calendar days between them.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1900 (a Monday).
//! * The valid date range is 1900-01-01 to 2199-12-31.

use crate::weekday::Weekday;
use tat_core::errors::{Error, Result};
use tat_core::utilities::data_formatters::{format_day_month_year, format_iso};
use tat_core::utilities::data_parsers::parse_date;

/// A calendar date with no time component, represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// Returns an error if `serial` lies outside `[MIN, MAX]`.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1900, 2199]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Parse a date from spreadsheet text.
    ///
    /// Accepts `YYYY-MM-DD` (with an optional time part), `DD-MMM-YYYY`, and
    /// `MM/DD/YYYY`.  Returns `None` when the text matches no format or names
    /// an impossible day, so callers can treat it as "not provided".
    pub fn parse_lenient(s: &str) -> Option<Self> {
        let (y, m, d) = parse_date(s)?;
        Date::from_ymd(y, m, d).ok()
    }

    /// Convert an Excel 1900-system serial (as stored in `.xlsx` cells) to a
    /// date.  The time-of-day fraction is dropped.
    ///
    /// Excel counts a phantom 29 Feb 1900, so serials from 61 on are one
    /// ahead of ours and serial 60 names no real day.
    pub fn from_excel_serial(serial: f64) -> Result<Self> {
        if !serial.is_finite() {
            return Err(Error::Date(format!("Excel serial {serial} is not a number")));
        }
        let whole = serial.floor();
        if whole == 60.0 {
            return Err(Error::Date("Excel serial 60 is the nonexistent 1900-02-29".into()));
        }
        if whole < 1.0 || whole > f64::from(Self::MAX.0 + 1) {
            return Err(Error::Date(format!("Excel serial {serial} out of range")));
        }
        let whole = whole as i32;
        Date::from_serial(if whole > 60 { whole - 1 } else { whole })
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> (u16, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Epoch Jan 1, 1900 is a Monday (ordinal 1).
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    /// Return the week of the month as `((day_of_month - 1) / 7) + 1`.
    ///
    /// Days 1–7 are week 1, 8–14 week 2, and so on up to week 5.  This is a
    /// count of seven-day blocks from the 1st, not a calendar-row week, so
    /// the *n*-th occurrence of any weekday always falls in week *n*.
    pub fn week_of_month(&self) -> u8 {
        (self.day_of_month() - 1) / 7 + 1
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0 + n;
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!(
                "date arithmetic: result {serial} out of range"
            )));
        }
        Ok(Date(serial))
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the *n*-th occurrence of `weekday` in the month of `year`/`month`.
    ///
    /// # Errors
    /// Returns an error if `n` is zero or larger than the number of such
    /// weekdays in the month.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: u16, month: u8) -> Result<Self> {
        if n == 0 {
            return Err(Error::Date("nth_weekday: n must be >= 1".into()));
        }
        let first = Date::from_ymd(year, month, 1)?;
        let first_wd = first.weekday().ordinal();
        let target_wd = weekday.ordinal();
        let skip = ((target_wd as i32 - first_wd as i32).rem_euclid(7)) as u8;
        let day = 1 + skip + 7 * (n - 1);
        if day > days_in_month(year, month) {
            return Err(Error::Date(format!(
                "nth_weekday: {n}-th {weekday:?} does not exist in {year}-{month:02}"
            )));
        }
        Date::from_ymd(year, month, day)
    }

    // ── Formatting ────────────────────────────────────────────────────────────

    /// Format as `YYYY-MM-DD`.
    pub fn iso(&self) -> String {
        let (y, m, d) = self.ymd();
        format_iso(y, m, d)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = self.add_days(rhs).expect("date addition overflow");
    }
}

// ── Parsing & display ─────────────────────────────────────────────────────────

impl std::str::FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (y, m, d) =
            parse_date(s).ok_or_else(|| Error::Date(format!("unrecognised date {s:?}")))?;
        Date::from_ymd(y, m, d)
    }
}

/// Renders as `DD-MMM-YYYY` (e.g. `03-Mar-2025`).
impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        f.write_str(&format_day_month_year(y, m, d))
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Optional integrations ─────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.iso())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "chrono")]
impl From<Date> for chrono::NaiveDate {
    fn from(date: Date) -> Self {
        let (y, m, d) = date.ymd();
        chrono::NaiveDate::from_ymd_opt(y as i32, m as u32, d as u32)
            .expect("every Date is a valid NaiveDate")
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;

    fn try_from(date: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        let year = u16::try_from(date.year())
            .map_err(|_| Error::Date(format!("year {} out of range", date.year())))?;
        Date::from_ymd(year, date.month() as u8, date.day() as u8)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Convert (year, month, day) to a serial number.  Serial 1 = 1900-01-01.
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32;
    let m = month as i32;
    let d = day as i32;

    // Days in years 1900..year
    let mut serial = (y - 1900) * 365;
    // Leap years in [1901, year); 1900 itself is not a leap year
    serial += (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400;
    serial += MONTH_OFFSET[m as usize - 1] as i32;
    if m > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial += d;
    serial
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let mut y = (serial / 365 + 1900) as u16;
    loop {
        let start_of_year = serial_from_ymd(y, 1, 1);
        if serial < start_of_year {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let doy = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    let mut remaining = doy;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_epoch() {
        assert_eq!(date(1900, 1, 1).serial(), 1);
        assert_eq!(date(1900, 1, 1).weekday(), Weekday::Monday);
    }

    #[test]
    fn test_ymd_accessors() {
        for (y, m, d) in [(1900, 12, 31), (2000, 2, 29), (2025, 3, 3), (2199, 12, 31)] {
            let dt = date(y, m, d);
            assert_eq!(dt.ymd(), (y, m, d), "mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_invalid_dates() {
        assert!(Date::from_ymd(2025, 2, 29).is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
        assert!(Date::from_ymd(1899, 12, 31).is_err());
        assert!(Date::from_serial(0).is_err());
    }

    #[test]
    fn test_weekday() {
        // 2025-03-03 is a Monday, 2025-03-09 a Sunday
        assert_eq!(date(2025, 3, 3).weekday(), Weekday::Monday);
        assert_eq!(date(2025, 3, 8).weekday(), Weekday::Saturday);
        assert_eq!(date(2025, 3, 9).weekday(), Weekday::Sunday);
    }

    #[test]
    fn test_week_of_month() {
        assert_eq!(date(2025, 3, 1).week_of_month(), 1);
        assert_eq!(date(2025, 3, 7).week_of_month(), 1);
        assert_eq!(date(2025, 3, 8).week_of_month(), 2);
        assert_eq!(date(2025, 3, 22).week_of_month(), 4);
        assert_eq!(date(2025, 3, 29).week_of_month(), 5);
        assert_eq!(date(2025, 3, 31).week_of_month(), 5);
    }

    #[test]
    fn test_arithmetic() {
        let d = date(2025, 1, 31);
        assert_eq!(d + 1, date(2025, 2, 1));
        assert_eq!(date(2025, 3, 1) - 1, date(2025, 2, 28));
        assert_eq!(date(2025, 3, 21) - date(2025, 3, 14), 7);
        assert_eq!(date(2025, 3, 14).days_between(date(2025, 3, 11)), -3);
        assert!(Date::MAX.add_days(1).is_err());
    }

    #[test]
    fn test_nth_weekday() {
        let second_sat = Date::nth_weekday(2, Weekday::Saturday, 2025, 3).unwrap();
        assert_eq!(second_sat, date(2025, 3, 8));
        assert_eq!(second_sat.week_of_month(), 2);
        assert!(Date::nth_weekday(5, Weekday::Wednesday, 2025, 2).is_err());
        assert!(Date::nth_weekday(0, Weekday::Monday, 2025, 1).is_err());
    }

    #[test]
    fn test_display_and_parse() {
        let d = date(2025, 3, 3);
        assert_eq!(d.to_string(), "03-Mar-2025");
        assert_eq!(d.iso(), "2025-03-03");
        assert_eq!(format!("{d:?}"), "Date(2025-03-03)");
        assert_eq!("03-Mar-2025".parse::<Date>(), Ok(d));
        assert_eq!("2025-03-03 00:00:00".parse::<Date>(), Ok(d));
        assert!("31-Feb-2025".parse::<Date>().is_err());
    }

    #[test]
    fn test_parse_lenient_degrades() {
        assert_eq!(Date::parse_lenient("08/15/2025"), Some(date(2025, 8, 15)));
        assert_eq!(Date::parse_lenient("02/31/2025"), None);
    }

    #[test]
    fn test_from_excel_serial() {
        assert_eq!(Date::from_excel_serial(1.0), Ok(date(1900, 1, 1)));
        assert_eq!(Date::from_excel_serial(59.0), Ok(date(1900, 2, 28)));
        assert_eq!(Date::from_excel_serial(61.0), Ok(date(1900, 3, 1)));
        assert_eq!(Date::from_excel_serial(45658.0), Ok(date(2025, 1, 1)));
        assert_eq!(Date::from_excel_serial(45719.75), Ok(date(2025, 3, 3)));
        assert!(Date::from_excel_serial(60.0).is_err());
        assert!(Date::from_excel_serial(0.0).is_err());
        assert!(Date::from_excel_serial(f64::NAN).is_err());
        assert!(Date::from_excel_serial(1e9).is_err());
    }

    #[test]
    fn test_parse_lenient_slashed_dates_are_month_first() {
        assert_eq!(Date::parse_lenient("03/04/2025"), Some(date(2025, 3, 4)));
        assert_eq!(Date::parse_lenient("03/15/2025"), Some(date(2025, 3, 15)));
        assert_eq!(Date::parse_lenient("15/03/2025"), None);
        assert_eq!(Date::parse_lenient("n/a"), None);
        assert_eq!(Date::parse_lenient(""), None);
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_chrono_conversion() {
        let d = date(2025, 10, 2);
        let naive: chrono::NaiveDate = d.into();
        assert_eq!(naive, chrono::NaiveDate::from_ymd_opt(2025, 10, 2).unwrap());
        assert_eq!(Date::try_from(naive), Ok(d));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_iso_string() {
        let d = date(2025, 8, 15);
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"2025-08-15\"");
        let back: Date = serde_json::from_str("\"15-Aug-2025\"").unwrap();
        assert_eq!(back, d);
    }
}
