//! CLI argument definitions for Secret Santa draws.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use santa_cli::logging::LogFormat;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "santa",
    version,
    about = "Secret Santa - draw who gives a gift to whom",
    long_about = "Draw Secret Santa pairs from a participant list.\n\n\
                  The first CSV column is the participant name; every further column is an\n\
                  exclusion criterion (team, department, ...) in decreasing priority. In\n\
                  criteria mode givers avoid receivers sharing those values, dropping the\n\
                  lowest-priority criterion whenever nobody is left."
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

    /// Allow participant names in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Draw pairs from a participant CSV file.
    Shuffle(ShuffleArgs),

    /// Draw pairs for the built-in reindeer list.
    Example(DrawArgs),
}

#[derive(Parser)]
pub struct ShuffleArgs {
    /// Participant CSV: name column first, criterion columns after it.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Treat the first row as data rather than column labels.
    #[arg(long = "no-header")]
    pub no_header: bool,

    /// Field delimiter.
    #[arg(long = "delimiter", default_value_t = ',')]
    pub delimiter: char,

    #[command(flatten)]
    pub draw: DrawArgs,
}

#[derive(Args, Clone)]
pub struct DrawArgs {
    /// How receivers are chosen.
    #[arg(long = "mode", value_enum, default_value = "name")]
    pub mode: ModeArg,

    /// Number of leading criteria givers and receivers must differ on (0-5).
    ///
    /// Defaults to every criterion column. Ignored in name mode.
    #[arg(long = "criteria", allow_negative_numbers = true)]
    pub criteria: Option<i64>,

    /// Seed for a reproducible draw.
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Draw a receiver sharing criteria instead of failing when no compatible
    /// receiver is left.
    #[arg(long = "ignore-criteria")]
    pub ignore_criteria: bool,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    /// Anyone but yourself.
    Name,
    /// Avoid receivers sharing criterion values.
    Criteria,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
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

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}
