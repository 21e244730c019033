//! CLI entry point for the grade report tool.
//!
//! Provides subcommands for evaluating a single score, batch-grading a
//! roster CSV, and aggregating a roster into a JSON summary report.

use anyhow::Result;
use clap::{Parser, Subcommand};
use grade_report::grading::evaluate::evaluate;
use grade_report::grading::reporter::{grade_roster, write_summary};
use grade_report::output::print_json;
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "grade_report")]
#[command(about = "A tool to grade scores and produce class reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single percentage score
    Evaluate {
        /// Score to evaluate (0-100)
        #[arg(value_name = "SCORE", allow_negative_numbers = true)]
        score: f64,
    },
    /// Grade every row of a roster CSV
    Batch {
        /// Roster CSV with student,score columns
        #[arg(short, long)]
        input: String,

        /// CSV file to append graded rows to
        #[arg(short, long, default_value = "graded.csv")]
        output: String,
    },
    /// Aggregate a roster CSV into a JSON summary report
    Summarize {
        /// Roster CSV with student,score columns
        #[arg(short, long)]
        input: String,

        /// JSON file to write the summary to
        #[arg(short, long, default_value = "summary.json")]
        output: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/grade_report.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("grade_report.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate { score } => {
            let result = evaluate(score);
            print_json(&result)?;
        }
        Commands::Batch { input, output } => {
            let rows = grade_roster(&input, &output)?;
            info!(rows, "Batch grading complete");
        }
        Commands::Summarize { input, output } => {
            let summary = write_summary(&input, &output)?;
            info!(
                graded = summary.graded,
                invalid = summary.invalid,
                average = summary.average,
                overall = %summary.overall.grade,
                "Summary complete"
            );
        }
    }

    Ok(())
}
