//! Plain CSV output.

use crate::error::Result;
use crate::table::OutputTable;
use std::io::Write;

/// Write `table` as CSV, header row first.
pub fn write_report_csv<W: Write>(table: &OutputTable, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(table.headers())?;
    for row in table.rows() {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}
