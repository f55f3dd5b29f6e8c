//! Fixed-width text preview of a report for the terminal.

use crate::table::OutputTable;

/// Render the header and the first `max_rows` rows as an aligned text table.
///
/// A trailing line notes how many rows were left out.
pub fn render_preview(table: &OutputTable, max_rows: usize) -> String {
    let widths = table.column_widths();
    let shown = table.rows().len().min(max_rows);
    let mut out = String::new();

    push_line(&mut out, table.headers(), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);
    for row in &table.rows()[..shown] {
        push_line(&mut out, row, &widths);
    }
    let hidden = table.rows().len() - shown;
    if hidden > 0 {
        out.push_str(&format!("... {hidden} more rows\n"));
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!("{cell:<w$}", w = *w))
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(line.trim_end());
    out.push('\n');
}
