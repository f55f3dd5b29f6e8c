//! Input table to rendered report.

use crate::error::Result;
use crate::reader::InputTable;
use crate::table::OutputTable;
use tat_engine::{BatchSummary, EvaluatedCase, TatEngine};
use tat_time::Calendar;
use tracing::info;

/// A processed batch: evaluated cases, the rendered table, and tallies.
#[derive(Debug, Clone)]
pub struct Report {
    /// Evaluated cases in input order.
    pub cases: Vec<EvaluatedCase>,
    /// Rendered rows.
    pub table: OutputTable,
    /// Status counts.
    pub summary: BatchSummary,
}

/// Validate `input`, evaluate every row with `engine`, and render the result.
///
/// Fails only when template columns are missing; per-row date problems
/// degrade to `Pending`.
pub fn generate_report<C: Calendar>(input: &InputTable, engine: &TatEngine<C>) -> Result<Report> {
    input.validate()?;
    let cases = evaluate(engine, input);
    let summary = BatchSummary::from_cases(&cases);
    info!(
        calendar = engine.calendar().name(),
        total = summary.total,
        on_time = summary.on_time,
        exceeded = summary.exceeded,
        pending = summary.pending,
        penalty_days = summary.penalty_days,
        "evaluated batch"
    );
    Ok(Report {
        table: OutputTable::from_cases(input.headers(), &cases),
        cases,
        summary,
    })
}

#[cfg(not(feature = "parallel"))]
fn evaluate<C: Calendar>(engine: &TatEngine<C>, input: &InputTable) -> Vec<EvaluatedCase> {
    engine.evaluate_batch(input.to_case_records())
}

#[cfg(feature = "parallel")]
fn evaluate<C: Calendar>(engine: &TatEngine<C>, input: &InputTable) -> Vec<EvaluatedCase> {
    engine.evaluate_batch_par(input.to_case_records())
}
