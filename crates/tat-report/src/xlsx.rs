//! Styled XLSX output.
//!
//! Layout:
//! * header row: bold, header font colour on the header fill, centred;
//! * every data cell centred;
//! * the `Remarks` and `Due Days` cells filled by status;
//! * rows without a status fill get the zebra fill on even sheet rows;
//! * each column sized to its longest value plus two.

use crate::error::Result;
use crate::style::{Palette, StyleToken};
use crate::table::OutputTable;
use crate::template::{DUE_DAYS_COLUMN, REMARKS_COLUMN};
use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook, Worksheet};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Worksheet name of the report.
pub const SHEET_NAME: &str = "BGV_Report";

/// Default file name of the report workbook.
pub const REPORT_FILE_NAME: &str = "BGV_Final_TAT_Report.xlsx";

/// Writes an [`OutputTable`] as a styled workbook.
#[derive(Debug, Clone, Default)]
pub struct XlsxReportWriter {
    palette: Palette,
}

impl XlsxReportWriter {
    /// Create a writer using `palette`.
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Render `table` to workbook bytes.
    pub fn to_bytes(&self, table: &OutputTable) -> Result<Vec<u8>> {
        let mut workbook = self.build(table)?;
        Ok(workbook.save_to_buffer()?)
    }

    /// Render `table` and save it at `path`.
    pub fn save(&self, table: &OutputTable, path: impl AsRef<Path>) -> Result<()> {
        let mut workbook = self.build(table)?;
        workbook.save(path.as_ref())?;
        info!(path = %path.as_ref().display(), rows = table.rows().len(), "wrote XLSX report");
        Ok(())
    }

    fn build(&self, table: &OutputTable) -> Result<Workbook> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(SHEET_NAME)?;

        self.write_header(sheet, table)?;
        self.write_rows(sheet, table)?;

        for (col, width) in table.column_widths().into_iter().enumerate() {
            sheet.set_column_width(col as u16, (width + 2) as f64)?;
        }
        Ok(workbook)
    }

    fn write_header(&self, sheet: &mut Worksheet, table: &OutputTable) -> Result<()> {
        let header = centered()
            .set_bold()
            .set_font_color(Color::RGB(self.palette.header_font))
            .set_background_color(Color::RGB(self.palette.header_fill));
        for (col, name) in table.headers().iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, name, &header)?;
        }
        Ok(())
    }

    fn write_rows(&self, sheet: &mut Worksheet, table: &OutputTable) -> Result<()> {
        let plain = centered();
        let mut fills: HashMap<u32, Format> = HashMap::new();
        let remarks_col = table.column(REMARKS_COLUMN);
        let due_days_col = table.column(DUE_DAYS_COLUMN);

        for (i, row) in table.rows().iter().enumerate() {
            let sheet_row = i as u32 + 1;
            let remarks = remarks_col.map_or("", |c| row[c].as_str());
            let token = StyleToken::for_row(remarks, sheet_row + 1);

            for (col, value) in row.iter().enumerate() {
                let status_cell = Some(col) == remarks_col || Some(col) == due_days_col;
                let fill = match token {
                    StyleToken::Status(_) if status_cell => self.palette.fill(token),
                    StyleToken::AlternateRow => self.palette.fill(token),
                    _ => None,
                };
                let format = match fill {
                    Some(color) => &*fills
                        .entry(color)
                        .or_insert_with(|| centered().set_background_color(Color::RGB(color))),
                    None => &plain,
                };
                write_cell(sheet, sheet_row, col as u16, value, format)?;
            }
        }
        Ok(())
    }
}

fn centered() -> Format {
    Format::new()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
}

fn write_cell(sheet: &mut Worksheet, row: u32, col: u16, value: &str, format: &Format) -> Result<()> {
    if value.is_empty() {
        sheet.write_blank(row, col, format)?;
    } else {
        sheet.write_string_with_format(row, col, value, format)?;
    }
    Ok(())
}
