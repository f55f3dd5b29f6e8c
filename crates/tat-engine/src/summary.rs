//! Per-batch status counts.

use crate::record::EvaluatedCase;
use crate::status::TatStatus;

/// Counts of each status in an evaluated batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BatchSummary {
    /// Number of cases.
    pub total: usize,
    /// Cases still pending.
    pub pending: usize,
    /// Cases dispatched within TAT.
    pub on_time: usize,
    /// Cases dispatched late.
    pub exceeded: usize,
    /// Sum of the overrun days of all exceeded cases.
    pub penalty_days: u64,
}

impl BatchSummary {
    /// Tally a batch.
    pub fn from_cases(cases: &[EvaluatedCase]) -> Self {
        cases.iter().fold(Self::default(), |mut acc, case| {
            acc.total += 1;
            match case.status() {
                TatStatus::Pending => acc.pending += 1,
                TatStatus::OnTime => acc.on_time += 1,
                TatStatus::Exceeded => acc.exceeded += 1,
            }
            acc.penalty_days += case.penalty().map_or(0, |p| u64::from(p.days()));
            acc
        })
    }

    /// Count for one status.
    pub fn count(&self, status: TatStatus) -> usize {
        match status {
            TatStatus::Pending => self.pending,
            TatStatus::OnTime => self.on_time,
            TatStatus::Exceeded => self.exceeded,
        }
    }
}

impl std::fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} cases: {} {}, {} {}, {} {} ({} penalty days)",
            self.total,
            self.on_time,
            TatStatus::OnTime,
            self.exceeded,
            TatStatus::Exceeded,
            self.pending,
            TatStatus::Pending,
            self.penalty_days
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CaseRecord, TatEngine};
    use tat_time::{Date, NullCalendar};

    #[test]
    fn tallies_statuses_and_penalties() {
        let engine = TatEngine::new(NullCalendar);
        let start = Date::from_ymd(2025, 3, 1).unwrap();
        let due = start + 15;
        let cases = engine.evaluate_batch([
            CaseRecord::new().received(start).dispatched(due),
            CaseRecord::new().received(start).dispatched(due + 3),
            CaseRecord::new().received(start).dispatched(due + 2),
            CaseRecord::new().received(start),
        ]);
        let summary = BatchSummary::from_cases(&cases);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.count(TatStatus::OnTime), 1);
        assert_eq!(summary.count(TatStatus::Exceeded), 2);
        assert_eq!(summary.count(TatStatus::Pending), 1);
        assert_eq!(summary.penalty_days, 5);
        assert_eq!(
            summary.to_string(),
            "4 cases: 1 Within TAT, 2 Exceeded, 1 Pending (5 penalty days)"
        );
    }

    #[test]
    fn empty_batch() {
        assert_eq!(BatchSummary::from_cases(&[]), BatchSummary::default());
    }
}
