use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Stage archival components from a work order into transfer packages.
#[derive(Clone, Parser)]
#[command(name = "adoc")]
#[command(about = "Stage electronic records from a work order into per-component transfer packages.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file. Default: adoc.toml in the working directory, when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output (debug logging and a progress bar).
    #[arg(long, short = 'v', global = true, num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub verbose: Option<bool>,

    /// Write log records to this file instead of stderr.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Subcommand)]
pub enum Commands {
    /// Build one package per work order row under the staging location and write a TSV report.
    Stage(StageArgs),
    /// Check that a source location is ready to stage.
    Validate(SourceArgs),
}

#[derive(Clone, Args)]
pub struct SourceArgs {
    /// Source location: contains metadata/ and one directory per component.
    #[arg(long = "source-location", value_name = "DIR")]
    pub source: Option<PathBuf>,
}

#[derive(Clone, Args)]
pub struct StageArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Directory to create packages in.
    #[arg(long = "staging-location", value_name = "DIR")]
    pub staging: Option<PathBuf>,

    /// Number of workers. Default: 1.
    #[arg(long, short = 'w', value_parser = clap::value_parser!(usize))]
    pub workers: Option<usize>,

    /// Directory for the stage report. Default: working directory.
    #[arg(long, value_name = "DIR")]
    pub report_dir: Option<PathBuf>,

    /// Give up waiting for workers after this many seconds. Default: wait indefinitely.
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64))]
    pub collect_timeout: Option<u64>,
}
