//! File round trips: template, CSV and XLSX input on disk, XLSX and CSV
//! reports written back out.

use rust_xlsxwriter::{Format, Workbook};
use std::fs;
use tat_report::template::{
    template_xlsx, write_template_csv, TEMPLATE_COLUMNS, TEMPLATE_FILE_NAME,
};
use tat_report::xlsx::REPORT_FILE_NAME;
use tat_report::{
    generate_report, write_report_csv, InputTable, ReportConfig, ReportError, XlsxReportWriter,
};

const INPUT: &str = "\
Sl.No,CandidateCode,Candidate Name,BWR_Date of Submission,BWR_TAT Due On,BWR_Reinitiated,BWR_Date of Report Received,BGV_Received On,BGV_TAT Due On,BGV_Reinitiated,BGV_Final Dispatch,Client
1,C001,Asha Rao,01-Mar-2025,,,,03-Mar-2025,,03-Mar-2025,03/13/2025,Acme
2,C002,Ben Das,,,,,2025-03-03,,,2025-03-24 10:15:00,Acme
3,C003,Chen Li,,,,,2025-03-03,,,,Globex
4,C004,Dev Iyer,,,,,not a date,,,2025-03-24,Globex
";

#[test]
fn csv_in_xlsx_and_csv_out() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("cases.csv");
    fs::write(&input_path, INPUT).unwrap();

    let input = InputTable::from_csv_path(&input_path).unwrap();
    assert_eq!(input.len(), 4);

    let config = ReportConfig::default();
    let report = generate_report(&input, &config.engine().unwrap()).unwrap();
    assert_eq!(report.summary.to_string(), "4 cases: 1 Within TAT, 1 Exceeded, 2 Pending (3 penalty days)");

    let xlsx_path = dir.path().join(REPORT_FILE_NAME);
    XlsxReportWriter::new(config.palette().unwrap())
        .save(&report.table, &xlsx_path)
        .unwrap();
    let bytes = fs::read(&xlsx_path).unwrap();
    assert!(bytes.starts_with(b"PK"));

    let csv_path = dir.path().join("report.csv");
    write_report_csv(&report.table, fs::File::create(&csv_path).unwrap()).unwrap();
    let written = fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].ends_with("Client,Final TAT Due Date for Report,Remarks,Due Days"));
    assert_eq!(
        lines[1],
        "1,C001,Asha Rao,01-Mar-2025,,,,03-Mar-2025,,03-Mar-2025,13-Mar-2025,Acme,13-Mar-2025,Within TAT,"
    );
    assert_eq!(
        lines[2],
        "2,C002,Ben Das,,,,,03-Mar-2025,,,24-Mar-2025,Acme,21-Mar-2025,Exceeded,3 days Deduction"
    );
    assert!(lines[3].ends_with("Globex,21-Mar-2025,Pending,"));
    assert!(lines[4].ends_with(",,,,24-Mar-2025,Globex,,Pending,"));
}

#[test]
fn missing_columns_write_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("partial.csv");
    fs::write(&input_path, "Sl.No,Candidate Name,BGV_Received On\n1,Asha,2025-03-03\n").unwrap();

    let input = InputTable::from_csv_path(&input_path).unwrap();
    let engine = ReportConfig::default().engine().unwrap();
    let err = generate_report(&input, &engine).unwrap_err();
    assert!(matches!(err, ReportError::MissingColumns(_)));
    assert_eq!(
        err.to_string(),
        "Missing columns: CandidateCode, BWR_Date of Submission, BWR_TAT Due On, \
         BWR_Reinitiated, BWR_Date of Report Received, BGV_TAT Due On, \
         BGV_Reinitiated, BGV_Final Dispatch"
    );
}

#[test]
fn config_file_changes_the_deadline() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("tat.json");
    fs::write(
        &config_path,
        r#"{ "holidays": ["2025-03-14"], "sla": { "reinitiated_days": 8, "received_days": 15 } }"#,
    )
    .unwrap();
    let config = ReportConfig::load(&config_path).unwrap();

    let input = InputTable::from_csv_reader(INPUT.as_bytes()).unwrap();
    let report = generate_report(&input, &config.engine().unwrap()).unwrap();
    // 2025-03-14 is a holiday and the 22nd a 4th Saturday: due on the 24th.
    assert_eq!(report.table.rows()[1][12], "24-Mar-2025");
    assert_eq!(report.table.rows()[1][13], "Within TAT");
    assert_eq!(report.table.rows()[1][14], "");
}

#[test]
fn templates_carry_every_column() {
    let mut buf = Vec::new();
    write_template_csv(&mut buf).unwrap();
    let header = String::from_utf8(buf).unwrap();
    let parsed = InputTable::from_csv_reader(header.as_bytes()).unwrap();
    assert_eq!(parsed.headers(), TEMPLATE_COLUMNS);
    assert!(parsed.is_empty());
    assert!(parsed.validate().is_ok());

    assert!(template_xlsx().unwrap().starts_with(b"PK"));
}

#[test]
fn missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ReportConfig::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ReportError::Io(_)));
}

#[test]
fn filled_xlsx_template_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let template_path = dir.path().join(TEMPLATE_FILE_NAME);
    fs::write(&template_path, template_xlsx().unwrap()).unwrap();
    let blank = InputTable::from_path(&template_path).unwrap();
    assert_eq!(blank.headers(), TEMPLATE_COLUMNS);
    assert!(blank.is_empty());

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    let date_format = Format::new().set_num_format("dd-mmm-yyyy");
    for (col, name) in blank.headers().iter().enumerate() {
        sheet.write_string(0, col as u16, name).unwrap();
    }
    // Received as a formatted date cell, dispatch as a bare serial.
    sheet.write_number(1, 0, 1).unwrap();
    sheet.write_string(1, 1, "C001").unwrap();
    sheet.write_string(1, 2, "Asha Rao").unwrap();
    sheet.write_number_with_format(1, 7, 45719.0, &date_format).unwrap();
    sheet.write_number(1, 10, 45742.0).unwrap();
    // Dates typed as text.
    sheet.write_number(2, 0, 2).unwrap();
    sheet.write_string(2, 9, "03-Mar-2025").unwrap();
    sheet.write_string(2, 10, "03/13/2025").unwrap();
    let filled_path = dir.path().join("filled.xlsx");
    workbook.save(&filled_path).unwrap();

    let input = InputTable::from_path(&filled_path).unwrap();
    assert_eq!(input.len(), 2);
    let report = generate_report(&input, &ReportConfig::default().engine().unwrap()).unwrap();
    assert_eq!(
        report.table.rows()[0],
        [
            "1", "C001", "Asha Rao", "", "", "", "", "03-Mar-2025", "", "", "26-Mar-2025",
            "21-Mar-2025", "Exceeded", "5 days Deduction"
        ]
    );
    assert_eq!(
        report.table.rows()[1],
        [
            "2", "", "", "", "", "", "", "", "", "03-Mar-2025", "13-Mar-2025", "13-Mar-2025",
            "Within TAT", ""
        ]
    );
}

#[test]
fn csv_input_is_chosen_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cases.CSV");
    fs::write(&path, INPUT).unwrap();
    assert_eq!(InputTable::from_path(&path).unwrap().len(), 4);
}
