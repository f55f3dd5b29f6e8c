//! # tat-report
//!
//! Everything around the engine that touches files: the input template,
//! CSV reading with column validation, the rendered output table, styled
//! XLSX and plain CSV writers, a terminal preview, and JSON configuration.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// JSON run configuration.
pub mod config;

/// Plain CSV writer.
pub mod csv_writer;

/// `ReportError`.
pub mod error;

/// Input to report in one call.
pub mod pipeline;

/// Terminal preview.
pub mod preview;

/// CSV input.
pub mod reader;

/// Status to style lookup.
pub mod style;

/// Rendered output table.
pub mod table;

/// Template columns.
pub mod template;

/// Styled workbook writer.
pub mod xlsx;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use config::ReportConfig;
pub use csv_writer::write_report_csv;
pub use error::{ReportError, Result};
pub use pipeline::{generate_report, Report};
pub use preview::render_preview;
pub use reader::InputTable;
pub use style::{Palette, StyleToken};
pub use table::OutputTable;
pub use xlsx::XlsxReportWriter;
