//! # tat-time
//!
//! Date, holiday set, and working-day calendar types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait and the null calendar.
pub mod calendar;

/// Concrete calendar implementations.
pub mod calendars;

/// `Date` type.
pub mod date;

/// `HolidaySet` — the fixed list of public holidays.
pub mod holidays;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, NullCalendar};
pub use calendars::{NonWorkingReason, WorkingCalendar};
pub use date::Date;
pub use holidays::{HolidaySet, DEFAULT_PUBLIC_HOLIDAYS};
pub use weekday::Weekday;
