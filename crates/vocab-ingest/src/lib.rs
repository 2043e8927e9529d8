//! Vocabulary table ingestion.
//!
//! This crate owns everything that touches the tabular source:
//!
//! - **CSV table**: whole-file load and atomic rewrite ([`CsvTable`])
//! - **Schema mapping**: header row to column index ([`SchemaMapping`])
//! - **Row normalization**: raw row to [`vocab_model::Record`] ([`normalize_row`])
//! - **Dataset reading**: shared read stage for export and print ([`VocabSource::select`])
//! - **Print stamping**: `printed_at` write-back ([`VocabSource::stamp_printed`])
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use vocab_ingest::{Selection, VocabSource};
//!
//! let mut source = VocabSource::open(Path::new("data/vocab.csv"))?;
//! let batch = source.select(Selection::Unprinted);
//! // ... render the batch ...
//! source.stamp_printed(&batch.rows(), "2025-01-01 12:00:00")?;
//! source.save()?;
//! ```

mod csv;
mod dataset;
mod error;
mod normalize;
mod persist;
mod schema;
mod stamp;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Table ===
pub use crate::csv::{CsvTable, HEADER_ROW};

// === Schema & Normalization ===
pub use normalize::{RatingParse, RowOutcome, normalize_row, parse_rating};
pub use schema::SchemaMapping;

// === Dataset Reading ===
pub use dataset::{ReadStats, RecordSet, Selection, SourceRecord, VocabSource};

// === Print Stamping ===
pub use stamp::StampOutcome;

// === File Output ===
pub use persist::write_atomic;
