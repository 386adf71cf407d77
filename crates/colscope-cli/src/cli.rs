//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// colscope: column profiling for tabular datasets
#[derive(Parser)]
#[command(name = "colscope")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit log records as JSON
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Profile every column of a data file
    Profile(ProfileArgs),

    /// Print the correlation matrix of numeric columns
    Correlate(CorrelateArgs),
}

/// Reading and type-inference flags shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// chrono format used to detect datetime columns
    #[arg(long, value_name = "FMT")]
    pub timestamp_format: Option<String>,

    /// Field delimiter for text files (auto-detected by default)
    #[arg(short, long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,

    /// Worksheet to read from a workbook (default: first sheet)
    #[arg(long)]
    pub sheet: Option<String>,

    /// JSON configuration file; flags override its values
    #[arg(short, long, value_name = "JSON")]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ProfileArgs {
    /// Path to the data file (CSV/TSV, XLSX/XLS/ODS, JSON)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub input: InputArgs,

    /// Flag columns whose empty percentage exceeds this (0 disables)
    #[arg(long, value_name = "PERCENT")]
    pub missing_threshold: Option<f64>,

    /// Spread percentage below which string columns are categorical
    #[arg(long, value_name = "PERCENT")]
    pub categorical_threshold: Option<f64>,

    /// Write the report as CSV to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the profile as JSON
    #[arg(long)]
    pub json: bool,

    /// Skip the correlation matrix
    #[arg(long)]
    pub no_correlation: bool,

    /// Profile columns one at a time
    #[arg(long)]
    pub sequential: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CorrelateArgs {
    /// Path to the data file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub input: InputArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Accept a single ASCII character, or `tab`/`\t`.
fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "\\t" | "tab" => Ok(b'\t'),
        _ => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii() => Ok(c as u8),
                _ => Err(format!(
                    "delimiter must be a single ASCII character, got '{}'",
                    s
                )),
            }
        }
    }
}
