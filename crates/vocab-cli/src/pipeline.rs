//! Export, print and stats pipelines.
//!
//! Every pipeline starts with the same read stage ([`VocabSource::select`])
//! and differs only in the selection and the writer that follows:
//!
//! 1. **Export**: all records → `vocab.json`, `latest.json`, `report.json`
//! 2. **Print**: unprinted records → flashcard HTML → `printed_at` stamp
//! 3. **Stats**: all records → on-screen summary, nothing written
//!
//! Times are passed in by the caller so runs are reproducible in tests.

use anyhow::{Context, Result};
use chrono::{DateTime, Local, Utc};
use tracing::{info, info_span, warn};

use vocab_ingest::{Selection, StampOutcome, VocabSource};
use vocab_report::{
    ExportSnapshot, rating_distribution, render_flashcards, write_export, write_flashcards,
};

use crate::config::VocabConfig;
use crate::types::{ExportResult, PrintResult, PrintStamp, StatsResult};

/// Local time format written into `printed_at`.
pub const PRINT_STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats a `printed_at` value.
pub fn print_stamp(now: DateTime<Local>) -> String {
    now.format(PRINT_STAMP_FORMAT).to_string()
}

// ============================================================================
// Export
// ============================================================================

/// Writes the snapshot, freshness marker and report for every valid record.
///
/// A dry run reads and summarizes without writing any file.
pub fn run_export(
    config: &VocabConfig,
    generated_at: DateTime<Utc>,
    dry_run: bool,
) -> Result<ExportResult> {
    let span = info_span!("export", source = %config.source.display());
    let _guard = span.enter();

    let source = VocabSource::open(&config.source).context("read vocabulary source")?;
    let set = source.select(Selection::All);
    let stats = set.stats;
    let records = set.into_records();

    let snapshot = ExportSnapshot::new(&records, generated_at);
    let report = snapshot.report();
    let written = if dry_run {
        info!(records = records.len(), "dry run, no files written");
        Vec::new()
    } else {
        write_export(&snapshot, &config.export)?
    };
    info!(records = report.total_words, "export complete");

    Ok(ExportResult {
        source: config.source.clone(),
        report,
        stats,
        written,
        dry_run,
    })
}

// ============================================================================
// Print
// ============================================================================

/// Renders flashcards for unprinted records, then stamps those rows.
///
/// The document is fully written before the source table is touched; a run
/// interrupted in between prints the same rows again next time. With no
/// unprinted records nothing is rendered or written. A dry run writes the
/// document but leaves the source unchanged.
pub fn run_print(config: &VocabConfig, stamp: &str, dry_run: bool) -> Result<PrintResult> {
    let span = info_span!("print", source = %config.source.display());
    let _guard = span.enter();

    let mut source = VocabSource::open(&config.source).context("read vocabulary source")?;
    let batch = source.select(Selection::Unprinted);

    if batch.is_empty() {
        info!("no new (unprinted) cards found");
        return Ok(PrintResult {
            source: config.source.clone(),
            cards: 0,
            pages: 0,
            output: None,
            stamp: PrintStamp::NothingToPrint,
            stats: batch.stats,
        });
    }
    info!(cards = batch.len(), "found unprinted cards");

    let sheet = render_flashcards(batch.records(), &config.layout);
    write_flashcards(&config.print_output, &sheet)?;

    let stamp_state = if dry_run {
        info!("dry run, source not stamped");
        PrintStamp::DryRun
    } else {
        match source
            .stamp_printed(&batch.rows(), stamp)
            .context("stamp printed rows")?
        {
            StampOutcome::Stamped { rows } => {
                source.save().context("save vocabulary source")?;
                PrintStamp::Stamped {
                    rows,
                    at: stamp.to_string(),
                }
            }
            StampOutcome::NoTrackingColumn => {
                warn!("cards rendered but not tracked; they will print again next run");
                PrintStamp::NoTrackingColumn
            }
        }
    };

    Ok(PrintResult {
        source: config.source.clone(),
        cards: sheet.cards,
        pages: sheet.pages,
        output: Some(config.print_output.clone()),
        stamp: stamp_state,
        stats: batch.stats,
    })
}

// ============================================================================
// Stats
// ============================================================================

/// Counts records, unprinted records and ratings without writing anything.
pub fn run_stats(config: &VocabConfig) -> Result<StatsResult> {
    let span = info_span!("stats", source = %config.source.display());
    let _guard = span.enter();

    let source = VocabSource::open(&config.source).context("read vocabulary source")?;
    let set = source.select(Selection::All);
    let unprinted = set
        .records()
        .filter(|record| Selection::Unprinted.includes(record))
        .count();
    let stats = set.stats;
    let records = set.into_records();

    Ok(StatsResult {
        source: config.source.clone(),
        records: records.len(),
        unprinted,
        distribution: rating_distribution(&records),
        stats,
    })
}
