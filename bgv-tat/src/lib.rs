//! # bgv-tat
//!
//! Working-day turnaround-time (TAT) compliance for background-verification
//! (BGV) cases.
//!
//! This crate is a **façade** that re-exports the workspace crates and ships
//! the `bgv-tat` command-line tool.
//!
//! ## Quick start
//!
//! ```rust
//! use bgv_tat::engine::{CaseRecord, TatEngine, TatStatus};
//! use bgv_tat::time::{Date, WorkingCalendar};
//!
//! let engine = TatEngine::new(WorkingCalendar::default());
//! let received = Date::from_ymd(2025, 3, 3).unwrap();
//! let case = engine.evaluate(CaseRecord::new().received(received));
//! assert_eq!(case.due_date(), Some(Date::from_ymd(2025, 3, 21).unwrap()));
//! assert_eq!(case.status(), TatStatus::Pending);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type and date-string utilities.
pub use tat_core as core;

/// Date, holiday set, and working-day calendars.
pub use tat_time as time;

/// Due dates, statuses, and batch evaluation.
pub use tat_engine as engine;

/// Template, input, configuration, and report writers.
pub use tat_report as report;
