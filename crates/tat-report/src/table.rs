//! The rendered report table shared by every writer.

use crate::template::{is_date_column, DUE_DATE_COLUMN, DUE_DAYS_COLUMN, REMARKS_COLUMN};
use tat_engine::EvaluatedCase;
use tat_time::Date;

/// Report rows as display strings.
///
/// Columns are the input headers followed by the due date, remarks and due
/// days columns.  Date columns are normalised to `DD-MMM-YYYY`; cells that
/// held no usable date are blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl OutputTable {
    /// Render evaluated cases under `input_headers`.
    ///
    /// Each case's pass-through fields are matched to headers by name, so a
    /// field missing from a record renders blank.
    pub fn from_cases(input_headers: &[String], cases: &[EvaluatedCase]) -> Self {
        let mut headers = input_headers.to_vec();
        headers.extend(
            [DUE_DATE_COLUMN, REMARKS_COLUMN, DUE_DAYS_COLUMN]
                .iter()
                .map(|s| s.to_string()),
        );

        let rows = cases
            .iter()
            .map(|case| {
                let mut cells: Vec<String> = input_headers
                    .iter()
                    .map(|h| render_cell(h, case.record().get(h).unwrap_or("")))
                    .collect();
                cells.push(case.due_date().map(|d| d.to_string()).unwrap_or_default());
                cells.push(case.status().label().to_string());
                cells.push(case.penalty_description().unwrap_or_default());
                cells
            })
            .collect();

        Self { headers, rows }
    }

    /// Column headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Rows of display strings.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Index of a column by header.
    pub fn column(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    /// Widest rendered value (header included) of each column, in characters.
    pub fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                self.rows
                    .iter()
                    .map(|r| r[i].chars().count())
                    .chain(std::iter::once(h.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

fn render_cell(header: &str, value: &str) -> String {
    if is_date_column(header) {
        Date::parse_lenient(value)
            .map(|d| d.to_string())
            .unwrap_or_default()
    } else {
        value.to_string()
    }
}
