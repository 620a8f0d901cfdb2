//! CLI argument definitions for the catalog defect checker.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use catalog_fetch::DEFAULT_PRODUCTS_URL;

#[derive(Parser)]
#[command(
    name = "catalog-qa",
    version,
    about = "Product catalog defect checker - validate products served by a catalog API",
    long_about = "Fetch a product catalog and report products that break field rules.\n\n\
                  Checks that every product has a non-blank title, a non-negative numeric\n\
                  price, and a rating object whose rate is a number no greater than 5."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// Fetch the catalog and report defective products.
    Scan(ScanArgs),

    /// Validate a single product stored in a JSON file.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct ScanArgs {
    /// Catalog endpoint returning a JSON array of products.
    #[arg(
        long = "url",
        value_name = "URL",
        env = "CATALOG_QA_URL",
        default_value = DEFAULT_PRODUCTS_URL
    )]
    pub url: String,

    /// Request timeout in seconds.
    #[arg(long = "timeout", value_name = "SECS", default_value_t = 10.0)]
    pub timeout: f64,

    /// Read products from a JSON file instead of the API (takes precedence over --url).
    #[arg(long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Report format written to stdout.
    #[arg(long = "format", value_enum, default_value = "json")]
    pub format: ReportFormatArg,

    /// Exit with status 1 when any product is defective.
    ///
    /// By default the scan succeeds as long as the catalog could be fetched,
    /// since the catalog is expected to contain defects.
    #[arg(long = "fail-on-defects")]
    pub fail_on_defects: bool,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to a JSON file holding one product object.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormatArg {
    Json,
    Text,
    Table,
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
