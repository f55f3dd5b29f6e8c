//! # tat-engine
//!
//! Turnaround-time evaluation for background-verification cases: derive a
//! due date from the reinitiation or receipt date and classify the dispatch
//! against it.
//!
//! ```
//! use tat_engine::{CaseRecord, TatEngine, TatStatus};
//! use tat_time::{Date, WorkingCalendar};
//!
//! let engine = TatEngine::new(WorkingCalendar::default());
//! let reinitiated = Date::from_ymd(2025, 3, 3).unwrap();
//! let case = engine.evaluate(
//!     CaseRecord::new()
//!         .reinitiated(reinitiated)
//!         .dispatched(Date::from_ymd(2025, 3, 16).unwrap()),
//! );
//! assert_eq!(case.due_date(), Some(Date::from_ymd(2025, 3, 13).unwrap()));
//! assert_eq!(case.status(), TatStatus::Exceeded);
//! assert_eq!(case.penalty_description().as_deref(), Some("3 days Deduction"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `TatEngine`.
pub mod engine;

/// SLA windows.
pub mod policy;

/// Input and output records.
pub mod record;

/// Compliance status and penalty.
pub mod status;

/// Batch tallies.
pub mod summary;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use engine::TatEngine;
pub use policy::SlaPolicy;
pub use record::{CaseRecord, EvaluatedCase};
pub use status::{Penalty, TatStatus};
pub use summary::BatchSummary;
