//! Concrete calendar implementations.

/// The BGV calendar: Sundays, 2nd/4th Saturdays, and configured holidays.
pub mod working_calendar;

pub use working_calendar::{NonWorkingReason, WorkingCalendar};
