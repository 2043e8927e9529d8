use anyhow::{Context, Result};
use chrono::{Local, Utc};

use vocab_cli::config::VocabConfig;
use vocab_cli::pipeline::{print_stamp, run_export, run_print, run_stats};
use vocab_cli::types::{ExportResult, PrintResult, StatsResult};

use crate::cli::{ExportArgs, PrintArgs, SourceArgs};

pub fn export(args: &ExportArgs) -> Result<ExportResult> {
    let config = load_config(&args.source)?;
    run_export(&config, Utc::now(), args.dry_run)
}

pub fn print(args: &PrintArgs) -> Result<PrintResult> {
    let config = load_config(&args.source)?.with_print_output(args.output.clone());
    run_print(&config, &print_stamp(Local::now()), args.dry_run)
}

pub fn stats(args: &SourceArgs) -> Result<StatsResult> {
    let config = load_config(args)?;
    run_stats(&config)
}

fn load_config(args: &SourceArgs) -> Result<VocabConfig> {
    let config = VocabConfig::load(&args.config).context("load configuration")?;
    Ok(config.with_source(args.source.clone()))
}
