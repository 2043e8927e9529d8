//! CLI argument definitions for the vocabulary pipelines.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use vocab_cli::config::DEFAULT_CONFIG_FILE;

#[derive(Parser)]
#[command(
    name = "vocab",
    version,
    about = "Vocabulary deck tools - export JSON and print flashcards",
    long_about = "Build artifacts from a personal vocabulary table.\n\n\
                  export writes the JSON snapshot, freshness marker and report.\n\
                  print renders unprinted entries as A4 flashcards and stamps them."
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
    /// Export every entry to vocab.json, latest.json and report.json.
    Export(ExportArgs),

    /// Render unprinted entries as flashcards and mark them printed.
    Print(PrintArgs),

    /// Show entry counts and the rating distribution.
    Stats(SourceArgs),
}

/// Options shared by every command.
#[derive(Args)]
pub struct SourceArgs {
    /// Configuration file.
    #[arg(long = "config", value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Vocabulary table to read (overrides `source` in the config).
    #[arg(long = "source", value_name = "PATH")]
    pub source: Option<PathBuf>,
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Read and summarize without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct PrintArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Flashcard document to write (overrides `print.output` in the config).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write the flashcards but leave the vocabulary table unstamped.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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
