//! CLI argument definitions for the survey analyzer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "survey-insight",
    version,
    about = "Survey Insight - Analyze employee survey spreadsheets",
    long_about = "Analyze employee survey data from CSV or spreadsheet files.\n\n\
                  Detects raw-response, frequency-distribution, and department-score\n\
                  layouts, computes per-question statistics and priority quadrants,\n\
                  and compares departments against the overall result."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze a raw-response or frequency-distribution survey file.
    Analyze(AnalyzeArgs),

    /// Analyze a pre-aggregated department-score matrix file.
    Departments(DepartmentsArgs),

    /// List the question category keyword table.
    Categories,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Survey file (.csv or first sheet of .xlsx/.xls/.ods).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Inclusive lower scale bound.
    #[arg(long = "scale-min", default_value_t = 1.0)]
    pub scale_min: f64,

    /// Inclusive upper scale bound.
    #[arg(long = "scale-max", default_value_t = 5.0)]
    pub scale_max: f64,

    /// Means at or below this value are extracted as issues.
    #[arg(long = "issue-threshold", default_value_t = 3.0)]
    pub issue_threshold: f64,

    /// Means at or above this value are extracted as excellent.
    #[arg(long = "excellent-threshold", default_value_t = 4.0)]
    pub excellent_threshold: f64,

    /// Seed for frequency-table reconstruction (random when omitted).
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,

    /// Print the per-department breakdown after the question summary.
    #[arg(long = "departments")]
    pub departments: bool,

    /// Print the answer distribution for one question key.
    #[arg(long = "distribution", value_name = "QUESTION_KEY")]
    pub distribution: Option<String>,

    /// Write the full analysis report as JSON.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Exit non-zero when validation finds non-numeric answers.
    #[arg(long = "fail-on-errors")]
    pub fail_on_errors: bool,
}

#[derive(Parser)]
pub struct DepartmentsArgs {
    /// Department-score matrix file (.csv or first sheet of a workbook).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Write the full analysis report as JSON.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
