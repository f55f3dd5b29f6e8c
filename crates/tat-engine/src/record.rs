//! Case records: the engine's input and output rows.

use crate::status::{Penalty, TatStatus};
use tat_time::Date;

/// One candidate's BGV case as read from the input table.
///
/// The three dates are the only fields the engine reads.  Everything else in
/// the input row travels in [`fields`](CaseRecord::fields) untouched, in
/// column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CaseRecord {
    /// Date the case was reinitiated, if ever.
    pub reinitiated_on: Option<Date>,
    /// Date the case was received.
    pub received_on: Option<Date>,
    /// Date the final report was dispatched.
    pub final_dispatch_on: Option<Date>,
    /// Pass-through `(column, value)` pairs.
    pub fields: Vec<(String, String)>,
}

impl CaseRecord {
    /// An empty record with no dates and no pass-through fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reinitiation date.
    pub fn reinitiated(mut self, date: impl Into<Option<Date>>) -> Self {
        self.reinitiated_on = date.into();
        self
    }

    /// Set the receipt date.
    pub fn received(mut self, date: impl Into<Option<Date>>) -> Self {
        self.received_on = date.into();
        self
    }

    /// Set the final dispatch date.
    pub fn dispatched(mut self, date: impl Into<Option<Date>>) -> Self {
        self.final_dispatch_on = date.into();
        self
    }

    /// Append a pass-through field.
    pub fn field(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((column.into(), value.into()));
        self
    }

    /// Look up a pass-through field by column name.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v.as_str())
    }
}

/// A [`CaseRecord`] with its computed due date and compliance.
///
/// Built only by the engine; there are no setters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EvaluatedCase {
    record: CaseRecord,
    due_date: Option<Date>,
    status: TatStatus,
    penalty: Option<Penalty>,
}

impl EvaluatedCase {
    pub(crate) fn new(
        record: CaseRecord,
        due_date: Option<Date>,
        status: TatStatus,
        penalty: Option<Penalty>,
    ) -> Self {
        debug_assert_eq!(penalty.is_some(), status == TatStatus::Exceeded);
        Self {
            record,
            due_date,
            status,
            penalty,
        }
    }

    /// The input record.
    pub fn record(&self) -> &CaseRecord {
        &self.record
    }

    /// The computed due date, if a start date was available.
    pub fn due_date(&self) -> Option<Date> {
        self.due_date
    }

    /// The compliance status.
    pub fn status(&self) -> TatStatus {
        self.status
    }

    /// The overrun, present only for [`TatStatus::Exceeded`].
    pub fn penalty(&self) -> Option<Penalty> {
        self.penalty
    }

    /// The overrun as report text (`"3 days Deduction"`).
    pub fn penalty_description(&self) -> Option<String> {
        self.penalty.map(|p| p.to_string())
    }

    /// Give back the input record.
    pub fn into_record(self) -> CaseRecord {
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_dates_and_fields() {
        let d = Date::from_ymd(2025, 3, 3).unwrap();
        let record = CaseRecord::new()
            .received(d)
            .reinitiated(None)
            .field("CandidateCode", "C-001")
            .field("Candidate Name", "A. Kumar");
        assert_eq!(record.received_on, Some(d));
        assert_eq!(record.reinitiated_on, None);
        assert_eq!(record.final_dispatch_on, None);
        assert_eq!(record.get("CandidateCode"), Some("C-001"));
        assert_eq!(record.get("Sl.No"), None);
        assert_eq!(record.fields.len(), 2);
    }
}
