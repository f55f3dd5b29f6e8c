use anyhow::{anyhow, Context, Result};
use bgv_tat::engine::{BatchSummary, EvaluatedCase};
use bgv_tat::report::template::{template_xlsx, write_template_csv, TEMPLATE_FILE_NAME};
use bgv_tat::report::xlsx::REPORT_FILE_NAME;
use bgv_tat::report::{
    generate_report, render_preview, write_report_csv, InputTable, ReportConfig, XlsxReportWriter,
};
use bgv_tat::time::{Calendar, Date};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Working-day turnaround-time reports for background-verification cases.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[clap(flatten)]
    global_opts: GlobalOpts,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct GlobalOpts {
    /// JSON file with holidays, SLA windows, and status colours.
    #[arg(global = true, long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `info` or `tat_report=debug`.  Overrides `RUST_LOG`.
    #[arg(global = true, long)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write an empty input template (CSV when the path ends in `.csv`).
    Template {
        #[arg(long, default_value = TEMPLATE_FILE_NAME)]
        output: PathBuf,
    },
    /// Evaluate a filled template (`.xlsx` or `.csv`) and write the styled report.
    Report(ReportArgs),
    /// Add working days to a date.
    Due {
        /// Start date; today when omitted.
        #[arg(long)]
        from: Option<Date>,
        /// Working days to add.
        #[arg(long)]
        days: u32,
    },
    /// Say whether a date is a working day, and why not.
    Check {
        date: Date,
    },
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// Filled template, `.xlsx` or `.csv`.
    #[arg(long)]
    input: PathBuf,

    /// Styled workbook to write.
    #[arg(long, default_value = REPORT_FILE_NAME)]
    output: PathBuf,

    /// Also write the report as plain CSV.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Also write the evaluated cases and summary as JSON.
    #[arg(long)]
    json: Option<PathBuf>,

    /// Rows to print as a preview.
    #[arg(long, default_value_t = 10)]
    preview: usize,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: &'a BatchSummary,
    cases: &'a [EvaluatedCase],
}

fn init_tracing(level: Option<&str>) -> Result<()> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).with_context(|| format!("bad log filter {level:?}"))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .try_init()
        .map_err(|e| anyhow!(e))
}

fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    let config = ReportConfig::load_or_default(cli.global_opts.config.as_deref())
        .context("loading configuration")?;

    match cli.command {
        Command::Template { output } => write_template(&output, out),
        Command::Report(args) => write_report(&config, &args, out),
        Command::Due { from, days } => {
            let calendar = config.calendar()?;
            let from = match from {
                Some(date) => date,
                None => Date::try_from(chrono::Local::now().date_naive())?,
            };
            let due = calendar
                .checked_add_working_days(from, days)
                .ok_or_else(|| anyhow!("{from} + {days} working days is past {}", Date::MAX))?;
            writeln!(out, "{from} + {days} working days = {due} ({})", due.weekday())?;
            Ok(())
        }
        Command::Check { date } => {
            let calendar = config.calendar()?;
            match calendar.non_working_reason(date) {
                None => writeln!(out, "{date} ({}) is a working day", date.weekday())?,
                Some(reason) => writeln!(
                    out,
                    "{date} ({}) is not a working day: {reason}; next working day {}",
                    date.weekday(),
                    calendar
                        .checked_add_working_days(date, 1)
                        .map_or_else(|| "none".to_string(), |d| d.to_string())
                )?,
            }
            Ok(())
        }
    }
}

fn write_template<W: Write>(output: &Path, out: &mut W) -> Result<()> {
    let is_csv = output
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        let file = File::create(output).with_context(|| format!("creating {}", output.display()))?;
        write_template_csv(file)?;
    } else {
        std::fs::write(output, template_xlsx()?)
            .with_context(|| format!("writing {}", output.display()))?;
    }
    info!(path = %output.display(), "wrote template");
    writeln!(out, "Template written to {}", output.display())?;
    Ok(())
}

fn write_report<W: Write>(config: &ReportConfig, args: &ReportArgs, out: &mut W) -> Result<()> {
    let engine = config.engine()?;
    let input = InputTable::from_path(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let report = generate_report(&input, &engine)?;

    XlsxReportWriter::new(config.palette()?)
        .save(&report.table, &args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;

    if let Some(path) = &args.csv {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        write_report_csv(&report.table, BufWriter::new(file))?;
    }
    if let Some(path) = &args.json {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        let body = JsonReport {
            summary: &report.summary,
            cases: &report.cases,
        };
        serde_json::to_writer_pretty(BufWriter::new(file), &body)?;
    }

    if args.preview > 0 {
        write!(out, "{}", render_preview(&report.table, args.preview))?;
    }
    writeln!(out, "{}", report.summary)?;
    writeln!(out, "Report written to {}", args.output.display())?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.global_opts.log_level.as_deref())?;
    let stdout = io::stdout();
    run(cli, &mut stdout.lock())
}
