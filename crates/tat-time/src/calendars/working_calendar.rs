//! The BGV working-day calendar.
//!
//! Non-working days are Sundays, the 2nd and 4th Saturdays of each month,
//! and the dates in an injected [`HolidaySet`].
//!
//! "2nd" and "4th" come from the week-of-month number
//! `((day_of_month - 1) / 7) + 1`, i.e. Saturdays falling on days 8–14 and
//! 22–28.

use crate::calendar::Calendar;
use crate::date::Date;
use crate::holidays::HolidaySet;
use crate::weekday::Weekday;
use tat_core::utilities::data_formatters::format_ordinal;

/// Week-of-month numbers whose Saturday is a day off.
const OFF_SATURDAY_WEEKS: [u8; 2] = [2, 4];

/// Why a date is not a working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonWorkingReason {
    /// Every Sunday.
    Sunday,
    /// A Saturday in week 2 or 4 of its month.
    AlternateSaturday(u8),
    /// A configured holiday.
    Holiday,
}

impl std::fmt::Display for NonWorkingReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NonWorkingReason::Sunday => write!(f, "Sunday"),
            NonWorkingReason::AlternateSaturday(week) => {
                write!(f, "{} Saturday", format_ordinal(u32::from(*week)))
            }
            NonWorkingReason::Holiday => write!(f, "public holiday"),
        }
    }
}

/// Working-day calendar for BGV turnaround computations.
#[derive(Debug, Clone)]
pub struct WorkingCalendar {
    holidays: HolidaySet,
}

impl WorkingCalendar {
    /// Create a calendar observing `holidays`.
    pub fn new(holidays: HolidaySet) -> Self {
        Self { holidays }
    }

    /// The configured holidays.
    pub fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }

    /// Explain why `date` is not a working day, or `None` if it is one.
    ///
    /// A Sunday holiday reports `Sunday`; weekday rules are checked first.
    pub fn non_working_reason(&self, date: Date) -> Option<NonWorkingReason> {
        match date.weekday() {
            Weekday::Sunday => return Some(NonWorkingReason::Sunday),
            Weekday::Saturday => {
                let week = date.week_of_month();
                if OFF_SATURDAY_WEEKS.contains(&week) {
                    return Some(NonWorkingReason::AlternateSaturday(week));
                }
            }
            _ => {}
        }
        if self.holidays.contains(date) {
            return Some(NonWorkingReason::Holiday);
        }
        None
    }
}

impl Default for WorkingCalendar {
    /// Calendar with the default public holidays.
    fn default() -> Self {
        Self::new(HolidaySet::default_public_holidays())
    }
}

impl Calendar for WorkingCalendar {
    fn name(&self) -> &str {
        "BGV working days"
    }

    fn is_working_day(&self, date: Date) -> bool {
        self.non_working_reason(date).is_none()
    }

    fn is_weekend(&self, date: Date) -> bool {
        matches!(
            self.non_working_reason(date),
            Some(NonWorkingReason::Sunday | NonWorkingReason::AlternateSaturday(_))
        )
    }
}
