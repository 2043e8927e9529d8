//! Vocabulary output generation.
//!
//! This crate turns normalized records into the artifacts consumed outside
//! the pipeline:
//!
//! - **Snapshot** (`vocab.json`): every record in fixed key order
//! - **Freshness marker** (`latest.json`): export time and record count
//! - **Report** (`report.json`): totals and rating distribution
//! - **Flashcards** (HTML): printable A4 sheets with eight cards per page

mod flashcards;
mod snapshot;

pub use flashcards::{
    CARDS_PER_PAGE, CardLayout, FlashcardSheet, LayoutError, page_count, render_flashcards,
    write_flashcards,
};
pub use snapshot::{
    ExportReport, ExportSnapshot, ExportTargets, FreshnessMarker, TIMESTAMP_FORMAT,
    rating_distribution, write_export,
};
