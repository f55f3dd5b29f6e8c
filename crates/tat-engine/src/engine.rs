//! `TatEngine` — due dates and compliance for case records.
//!
//! Each record is evaluated on its own:
//!
//! 1. **Due date.**  A reinitiated case is due
//!    [`reinitiated_days`](SlaPolicy::reinitiated_days) working days after
//!    reinitiation; otherwise a received case is due
//!    [`received_days`](SlaPolicy::received_days) working days after receipt;
//!    otherwise there is no due date.
//! 2. **Classification.**  Without a dispatch date or a due date the case is
//!    pending.  Otherwise the overrun is `dispatch - due` in *calendar* days:
//!    zero or less is within TAT, anything more is exceeded by that many days.
//!
//! A start date always yields a due date, except when the working-day walk
//! would pass [`Date::MAX`] (2199-12-31).  Such a case has no due date and
//! stays pending.

use crate::policy::SlaPolicy;
use crate::record::{CaseRecord, EvaluatedCase};
use crate::status::{Penalty, TatStatus};
use tat_time::{Calendar, Date, WorkingCalendar};

/// Evaluates case records against a working-day calendar and an SLA policy.
#[derive(Debug, Clone)]
pub struct TatEngine<C: Calendar = WorkingCalendar> {
    calendar: C,
    policy: SlaPolicy,
}

impl<C: Calendar> TatEngine<C> {
    /// Create an engine with the default SLA policy.
    pub fn new(calendar: C) -> Self {
        Self {
            calendar,
            policy: SlaPolicy::default(),
        }
    }

    /// Replace the SLA policy.
    pub fn with_policy(mut self, policy: SlaPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The calendar in use.
    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    /// The SLA policy in use.
    pub fn policy(&self) -> &SlaPolicy {
        &self.policy
    }

    /// Compute the due date of `record`.
    ///
    /// Returns `None` when neither start date is present.  With a start date
    /// the result is `Some` for every due date up to [`Date::MAX`]; a walk
    /// past that limit also returns `None`.
    pub fn compute_due_date(&self, record: &CaseRecord) -> Option<Date> {
        if let Some(start) = record.reinitiated_on {
            self.calendar
                .checked_add_working_days(start, self.policy.reinitiated_days())
        } else if let Some(start) = record.received_on {
            self.calendar
                .checked_add_working_days(start, self.policy.received_days())
        } else {
            None
        }
    }

    /// Classify `record` against `due_date`.
    ///
    /// Dispatch on the due date itself is within TAT.
    pub fn classify(record: &CaseRecord, due_date: Option<Date>) -> (TatStatus, Option<Penalty>) {
        let (Some(dispatch), Some(due)) = (record.final_dispatch_on, due_date) else {
            return (TatStatus::Pending, None);
        };
        let diff = dispatch - due;
        if diff <= 0 {
            (TatStatus::OnTime, None)
        } else {
            (TatStatus::Exceeded, Some(Penalty::new(diff.unsigned_abs())))
        }
    }

    /// Evaluate one record.
    pub fn evaluate(&self, record: CaseRecord) -> EvaluatedCase {
        let due_date = self.compute_due_date(&record);
        let (status, penalty) = Self::classify(&record, due_date);
        EvaluatedCase::new(record, due_date, status, penalty)
    }

    /// Evaluate every record, preserving order.  No record is dropped.
    pub fn evaluate_batch<I>(&self, records: I) -> Vec<EvaluatedCase>
    where
        I: IntoIterator<Item = CaseRecord>,
    {
        records.into_iter().map(|r| self.evaluate(r)).collect()
    }

    /// Evaluate every record on the rayon thread pool.
    ///
    /// Produces exactly what [`evaluate_batch`](TatEngine::evaluate_batch)
    /// does, in the same order.
    #[cfg(feature = "parallel")]
    pub fn evaluate_batch_par(&self, records: Vec<CaseRecord>) -> Vec<EvaluatedCase> {
        use rayon::prelude::*;
        records.into_par_iter().map(|r| self.evaluate(r)).collect()
    }
}

impl Default for TatEngine<WorkingCalendar> {
    fn default() -> Self {
        Self::new(WorkingCalendar::default())
    }
}
