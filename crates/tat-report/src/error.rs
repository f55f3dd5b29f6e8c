//! Report-layer errors.

use thiserror::Error;

/// Errors raised while reading input, loading configuration, or writing a
/// report.  Per-row date problems are never errors; see
/// [`crate::reader`].
#[derive(Debug, Error)]
pub enum ReportError {
    /// The input lacks one or more template columns.
    #[error("Missing columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// File-system failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Workbook could not be built or saved.
    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Input workbook could not be opened or read.
    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    /// Input workbook has no worksheet.
    #[error("workbook has no worksheets")]
    EmptyWorkbook,

    /// Input file extension names no supported format.
    #[error("unsupported input file {0:?}; expected .xlsx or .csv")]
    UnsupportedInput(String),

    /// Malformed configuration JSON.
    #[error("configuration JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration values that parse but make no sense.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Domain error from the calendar or engine.
    #[error(transparent)]
    Core(#[from] tat_core::Error),
}

/// Shorthand `Result` for the report layer.
pub type Result<T, E = ReportError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_message_lists_all() {
        let err = ReportError::MissingColumns(vec!["BGV_Reinitiated".into(), "Sl.No".into()]);
        assert_eq!(err.to_string(), "Missing columns: BGV_Reinitiated, Sl.No");
    }

    #[test]
    fn core_errors_are_transparent() {
        let err: ReportError = tat_core::Error::Date("bad".into()).into();
        assert_eq!(err.to_string(), "date error: bad");
    }
}
