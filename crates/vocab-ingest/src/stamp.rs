//! Print tracking write-back.

use tracing::{info, warn};
use vocab_model::Field;

use crate::csv::HEADER_ROW;
use crate::dataset::VocabSource;
use crate::error::{IngestError, Result};

/// Result of stamping printed rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StampOutcome {
    Stamped { rows: usize },
    /// The table has no `printed_at` column; nothing was changed.
    NoTrackingColumn,
}

impl VocabSource {
    /// Writes `stamp` into the `printed_at` cell of every listed row.
    ///
    /// Only the listed rows are touched. All row numbers are checked before
    /// the first cell is written, so an invalid list leaves the table as it
    /// was. The change is in memory until [`VocabSource::save`].
    pub fn stamp_printed(&mut self, rows: &[usize], stamp: &str) -> Result<StampOutcome> {
        let Some(column) = self.schema().index_of(Field::PrintedAt) else {
            warn!(
                path = %self.path().display(),
                "no 'printed_at' column found, skipping stamp"
            );
            return Ok(StampOutcome::NoTrackingColumn);
        };

        let last_row = self.table.last_row_number();
        if let Some(&row) = rows.iter().find(|&&row| row <= HEADER_ROW || row > last_row) {
            return Err(IngestError::RowOutOfRange {
                row,
                last_row,
                path: self.path().to_path_buf(),
            });
        }

        for &row in rows {
            self.table.set_cell(row, column, stamp)?;
        }
        info!(rows = rows.len(), stamp, "stamped printed rows");
        Ok(StampOutcome::Stamped { rows: rows.len() })
    }

    /// Rewrites the table file with any stamped cells.
    pub fn save(&self) -> Result<()> {
        self.table.save()?;
        info!(path = %self.path().display(), "saved vocabulary table");
        Ok(())
    }
}
