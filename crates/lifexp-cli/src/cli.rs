//! CLI argument definitions for the life-expectancy cleaner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "lifexp",
    version,
    about = "EU life expectancy cleaner - reshape the Eurostat wide table to long format",
    long_about = "Reshape the wide-format EU life-expectancy dataset (one column per year)\n\
                  into a normalized long-format CSV, filtered to a single region, with\n\
                  numeric cleaning of the value column."
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
    /// Run the cleaning pipeline: load raw TSV, transform, write CSV.
    Clean(CleanArgs),

    /// Sample the raw dataset into test fixtures (raw sample + expected output).
    Sample(SampleArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Data directory holding the raw TSV and receiving the cleaned CSV.
    #[arg(value_name = "DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Region code to filter by (exact, case-sensitive).
    #[arg(long = "region", default_value = "PT")]
    pub region: String,

    /// Input TSV path (default: <DATA_DIR>/eu_life_expectancy_raw.tsv).
    #[arg(long = "input", value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output CSV path (default: <DATA_DIR>/<region>_life_expectancy.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct SampleArgs {
    /// Data directory holding the full raw TSV.
    #[arg(value_name = "DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Region code the sample must cover (and filter the expected fixture by).
    #[arg(long = "region", default_value = "PT")]
    pub region: String,

    /// Raw rows to keep on each side (matching / non-matching the region).
    #[arg(long = "rows-per-side", default_value_t = 20)]
    pub rows_per_side: usize,

    /// Fixture output directory (default: <DATA_DIR>/fixtures).
    #[arg(long = "fixtures-dir", value_name = "DIR")]
    pub fixtures_dir: Option<PathBuf>,
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
