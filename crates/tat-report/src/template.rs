//! The data-entry template: required columns, date-column detection, and
//! blank template files.

use crate::error::Result;
use rust_xlsxwriter::Workbook;
use std::io::Write;

/// Column holding the reinitiation date.
pub const REINITIATED_COLUMN: &str = "BGV_Reinitiated";

/// Column holding the receipt date.
pub const RECEIVED_COLUMN: &str = "BGV_Received On";

/// Column holding the final dispatch date.
pub const DISPATCH_COLUMN: &str = "BGV_Final Dispatch";

/// Output column: computed due date.
pub const DUE_DATE_COLUMN: &str = "Final TAT Due Date for Report";

/// Output column: status label.
pub const REMARKS_COLUMN: &str = "Remarks";

/// Output column: penalty text.
pub const DUE_DAYS_COLUMN: &str = "Due Days";

/// Default name of the blank template workbook.
pub const TEMPLATE_FILE_NAME: &str = "BGV_Template.xlsx";

/// Every column an input file must carry, in template order.
pub const TEMPLATE_COLUMNS: [&str; 11] = [
    "Sl.No",
    "CandidateCode",
    "Candidate Name",
    "BWR_Date of Submission",
    "BWR_TAT Due On",
    "BWR_Reinitiated",
    "BWR_Date of Report Received",
    RECEIVED_COLUMN,
    "BGV_TAT Due On",
    REINITIATED_COLUMN,
    DISPATCH_COLUMN,
];

/// Markers that make a header a date column.  Matching is a case-sensitive
/// substring test, so `"BGV_Received On"` and `"BWR_Date of Submission"` are
/// date columns and `"CandidateCode"` is not.
const DATE_COLUMN_MARKERS: [&str; 4] = ["Date", "On", "Reinitiated", "Dispatch"];

/// Return `true` if values in column `header` are dates.
pub fn is_date_column(header: &str) -> bool {
    DATE_COLUMN_MARKERS.iter().any(|m| header.contains(m))
}

/// Template columns absent from `headers`, in template order.
pub fn missing_columns<S: AsRef<str>>(headers: &[S]) -> Vec<String> {
    TEMPLATE_COLUMNS
        .iter()
        .filter(|&&col| !headers.iter().any(|h| h.as_ref() == col))
        .map(|col| col.to_string())
        .collect()
}

/// Build a workbook holding only the template header row.
pub fn template_xlsx() -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (col, header) in TEMPLATE_COLUMNS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }
    Ok(workbook.save_to_buffer()?)
}

/// Write the template header row as CSV.
pub fn write_template_csv<W: Write>(writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(TEMPLATE_COLUMNS)?;
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_columns_follow_markers() {
        for header in [
            "BWR_Date of Submission",
            "BWR_TAT Due On",
            "BWR_Reinitiated",
            "BWR_Date of Report Received",
            RECEIVED_COLUMN,
            "BGV_TAT Due On",
            REINITIATED_COLUMN,
            DISPATCH_COLUMN,
        ] {
            assert!(is_date_column(header), "{header} should be a date column");
        }
        for header in ["Sl.No", "CandidateCode", "Candidate Name", "Remarks", "Location"] {
            assert!(!is_date_column(header), "{header} should not be a date column");
        }
    }

    #[test]
    fn missing_columns_in_template_order() {
        let headers = ["Candidate Name", "Sl.No", "Extra"];
        let missing = missing_columns(&headers);
        assert_eq!(missing.len(), 9);
        assert_eq!(missing[0], "CandidateCode");
        assert_eq!(missing[8], DISPATCH_COLUMN);
        assert!(missing_columns(&TEMPLATE_COLUMNS).is_empty());
    }

    #[test]
    fn template_csv_is_header_only() {
        let mut buf = Vec::new();
        write_template_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("Sl.No,CandidateCode,Candidate Name,"));
        assert!(text.trim_end().ends_with("BGV_Final Dispatch"));
    }

    #[test]
    fn template_xlsx_is_a_zip() {
        let bytes = template_xlsx().unwrap();
        assert!(bytes.starts_with(b"PK"));
    }
}
