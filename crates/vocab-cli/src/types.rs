use std::collections::BTreeMap;
use std::path::PathBuf;

use vocab_ingest::ReadStats;
use vocab_model::Rating;
use vocab_report::ExportReport;

#[derive(Debug)]
pub struct ExportResult {
    pub source: PathBuf,
    pub report: ExportReport,
    pub stats: ReadStats,
    /// Empty on a dry run.
    pub written: Vec<PathBuf>,
    pub dry_run: bool,
}

#[derive(Debug)]
pub struct PrintResult {
    pub source: PathBuf,
    pub cards: usize,
    pub pages: usize,
    /// Flashcard document, absent when there was nothing to print.
    pub output: Option<PathBuf>,
    pub stamp: PrintStamp,
    pub stats: ReadStats,
}

/// What happened to the source table after rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintStamp {
    /// No unprinted cards; nothing rendered or written.
    NothingToPrint,
    DryRun,
    NoTrackingColumn,
    Stamped { rows: usize, at: String },
}

#[derive(Debug)]
pub struct StatsResult {
    pub source: PathBuf,
    pub records: usize,
    pub unprinted: usize,
    pub distribution: BTreeMap<Rating, usize>,
    pub stats: ReadStats,
}
