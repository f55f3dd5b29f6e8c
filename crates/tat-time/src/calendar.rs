//! `Calendar` trait and the trivial calendar implementation.
//!
//! A calendar knows which dates are working days and can count and step
//! over them.

use crate::date::Date;
use crate::weekday::Weekday;

/// A working-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name.
    fn name(&self) -> &str;

    /// Return `true` if `date` is a working day in this calendar.
    fn is_working_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is a non-working day.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_working_day(date)
    }

    /// Return `true` if `date` is a weekend according to this calendar.
    ///
    /// Defaults to Saturday and Sunday.
    fn is_weekend(&self, date: Date) -> bool {
        matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
    }

    /// Advance `start` by `n` working days.
    ///
    /// Steps forward one calendar day at a time and counts each working day
    /// reached; the start date itself is never counted.  The result is the
    /// day on which the `n`-th working day is reached, so it is always a
    /// working day.  `n = 0` returns `start` unchanged.
    ///
    /// # Panics
    /// Panics if the walk runs past [`Date::MAX`]; see
    /// [`checked_add_working_days`](Calendar::checked_add_working_days).
    fn add_working_days(&self, start: Date, n: u32) -> Date {
        self.checked_add_working_days(start, n)
            .expect("working-day walk ran past the last supported date")
    }

    /// Like [`add_working_days`](Calendar::add_working_days), but returns
    /// `None` instead of running past [`Date::MAX`].
    fn checked_add_working_days(&self, start: Date, n: u32) -> Option<Date> {
        let mut date = start;
        let mut remaining = n;
        while remaining > 0 {
            date = date.add_days(1).ok()?;
            if self.is_working_day(date) {
                remaining -= 1;
            }
        }
        Some(date)
    }

    /// Return the first working day strictly after `date`.
    fn next_working_day(&self, date: Date) -> Date {
        self.add_working_days(date, 1)
    }

    /// Count the working days between `d1` (exclusive) and `d2` (inclusive).
    /// Returns a negative number if `d2 < d1`.
    fn working_days_between(&self, d1: Date, d2: Date) -> i32 {
        if d1 == d2 {
            return 0;
        }
        let sign = if d2 > d1 { 1 } else { -1 };
        let (start, end) = if d2 > d1 { (d1, d2) } else { (d2, d1) };
        let mut count = 0;
        let mut d = start + 1;
        while d <= end {
            if self.is_working_day(d) {
                count += 1;
            }
            if d == end {
                break;
            }
            d += 1;
        }
        sign * count
    }
}

/// A null calendar: every day is a working day.
///
/// Working-day arithmetic on it is plain calendar-day arithmetic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCalendar;

impl Calendar for NullCalendar {
    fn name(&self) -> &str {
        "Null"
    }

    fn is_working_day(&self, _date: Date) -> bool {
        true
    }

    fn is_weekend(&self, _date: Date) -> bool {
        false
    }
}
