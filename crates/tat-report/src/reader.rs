//! Input: read the table from `.xlsx` or CSV, check the template columns,
//! and turn rows into [`CaseRecord`]s.
//!
//! Dates are read leniently.  A blank or unparseable value in a date column
//! is treated as "not provided" and logged at `debug` level; it never stops
//! the batch.

use crate::error::{ReportError, Result};
use crate::template::{
    is_date_column, missing_columns, DISPATCH_COLUMN, RECEIVED_COLUMN, REINITIATED_COLUMN,
};
use calamine::{open_workbook_auto, Data, Reader};
use std::io::Read;
use std::path::Path;
use tat_engine::CaseRecord;
use tat_time::Date;
use tracing::{debug, warn};

/// A raw input table: a header row and string cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl InputTable {
    /// Build a table from headers and rows.  Short rows are padded with
    /// blanks and long rows truncated to the header width.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { headers, rows }
    }

    /// Read a CSV table from any reader.  The first record is the header.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers: Vec<String> = rdr.headers()?.iter().map(String::from).collect();
        let rows = rdr
            .records()
            .map(|rec| rec.map(|r| r.iter().map(String::from).collect()))
            .collect::<std::result::Result<Vec<Vec<String>>, csv::Error>>()?;
        Ok(Self::new(headers, rows))
    }

    /// Read a CSV file.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_csv_reader(file)
    }

    /// Read the first worksheet of an `.xlsx` workbook.  The first row is
    /// the header.
    ///
    /// Date cells and numbers under a date column are Excel serials and
    /// become ISO date text; everything else is kept as displayed.
    pub fn from_xlsx_path(path: impl AsRef<Path>) -> Result<Self> {
        let mut workbook = open_workbook_auto(path.as_ref())?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(ReportError::EmptyWorkbook)??;
        let mut rows = range.rows();
        let headers: Vec<String> = match rows.next() {
            Some(row) => row.iter().map(|c| cell_text(c, false)).collect(),
            None => return Ok(Self::default()),
        };
        let date_cols: Vec<bool> = headers.iter().map(|h| is_date_column(h)).collect();
        let rows = rows
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(i, c)| cell_text(c, date_cols.get(i).copied().unwrap_or(false)))
                    .collect()
            })
            .collect();
        Ok(Self::new(headers, rows))
    }

    /// Read `path` as `.xlsx`/`.xlsm`/`.xls` or `.csv`, by extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "xlsx" | "xlsm" | "xls" => Self::from_xlsx_path(path),
            "csv" => Self::from_csv_path(path),
            _ => Err(ReportError::UnsupportedInput(path.display().to_string())),
        }
    }

    /// Column headers, in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows, each as wide as the header row.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Return `true` if there are no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Fail with [`ReportError::MissingColumns`] unless every template column
    /// is present.
    pub fn validate(&self) -> Result<()> {
        let missing = missing_columns(&self.headers);
        if missing.is_empty() {
            Ok(())
        } else {
            warn!(missing = ?missing, "input is missing template columns");
            Err(ReportError::MissingColumns(missing))
        }
    }

    /// Convert every row into a [`CaseRecord`], in order.
    ///
    /// All cells travel as pass-through fields; the three engine dates are
    /// additionally parsed from their columns.
    pub fn to_case_records(&self) -> Vec<CaseRecord> {
        let idx = |name: &str| self.headers.iter().position(|h| h == name);
        let reinitiated = idx(REINITIATED_COLUMN);
        let received = idx(RECEIVED_COLUMN);
        let dispatch = idx(DISPATCH_COLUMN);

        self.rows
            .iter()
            .enumerate()
            .map(|(line, row)| {
                let date_at = |col: Option<usize>| {
                    col.and_then(|c| read_date(&row[c], &self.headers[c], line + 1))
                };
                CaseRecord {
                    reinitiated_on: date_at(reinitiated),
                    received_on: date_at(received),
                    final_dispatch_on: date_at(dispatch),
                    fields: self
                        .headers
                        .iter()
                        .cloned()
                        .zip(row.iter().cloned())
                        .collect(),
                }
            })
            .collect()
    }
}

/// Render one workbook cell as text.
fn cell_text(cell: &Data, date_column: bool) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.trim().to_string(),
        Data::DateTime(dt) => excel_date_text(dt.as_f64()),
        Data::Float(f) if date_column => excel_date_text(*f),
        Data::Int(i) if date_column => excel_date_text(*i as f64),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        // #N/A, #REF! and friends carry no value.
        _ => String::new(),
    }
}

fn excel_date_text(serial: f64) -> String {
    Date::from_excel_serial(serial)
        .map(|d| d.iso())
        .unwrap_or_default()
}

/// Parse one date cell, logging values that had content but no date.
fn read_date(value: &str, column: &str, row: usize) -> Option<Date> {
    let parsed = Date::parse_lenient(value);
    if parsed.is_none() && !value.trim().is_empty() {
        debug!(row, column, value, "unparseable date treated as absent");
    }
    parsed
}
