use crate::types::{LogLevel, OutputFormat};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "calltally")]
#[command(about = "Clean user and call log CSVs and export per-user call analytics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Optional TOML file with [paths] and [output] settings
    #[arg(long, default_value = "calltally.toml", global = true)]
    pub config: PathBuf,

    #[command(flatten)]
    pub paths: PathArgs,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Ignored when RUST_LOG is set
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Overrides for the input and output locations.
#[derive(Args, Debug, Clone, Default)]
pub struct PathArgs {
    #[arg(long, global = true)]
    pub users: Option<PathBuf>,

    #[arg(long, global = true)]
    pub call_logs: Option<PathBuf>,

    #[arg(long, global = true)]
    pub analytics_out: Option<PathBuf>,

    #[arg(long, global = true)]
    pub ordered_out: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Load both CSVs and write both reports (the default)
    Run,

    /// Load both CSVs and print the stored rows without writing reports
    Dump,
}
