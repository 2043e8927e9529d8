//! Reading records out of the vocabulary table.
//!
//! Both pipelines go through [`VocabSource::select`]; they only differ in
//! the [`Selection`] predicate applied after normalization.

use std::path::Path;

use tracing::{debug, info};
use vocab_model::Record;

use crate::csv::CsvTable;
use crate::error::Result;
use crate::normalize::{RatingParse, RowOutcome, normalize_row};
use crate::schema::SchemaMapping;

/// Which normalized records a read keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Every valid record (export).
    All,
    /// Valid records with an empty `printed_at` (print).
    Unprinted,
}

impl Selection {
    pub fn includes(self, record: &Record) -> bool {
        match self {
            Selection::All => true,
            Selection::Unprinted => !record.is_printed(),
        }
    }
}

/// A record together with the 1-based table row it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRecord {
    pub row: usize,
    pub record: Record,
}

/// Counters collected while selecting records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadStats {
    pub data_rows: usize,
    pub skipped_missing_en: usize,
    pub already_printed: usize,
    pub ratings_defaulted: usize,
    pub ratings_clamped: usize,
}

/// Records kept by a selection, in table order.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    pub entries: Vec<SourceRecord>,
    pub stats: ReadStats,
}

impl RecordSet {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.entries.iter().map(|entry| &entry.record)
    }

    /// Row numbers of the kept records, used to stamp exactly what was printed.
    pub fn rows(&self) -> Vec<usize> {
        self.entries.iter().map(|entry| entry.row).collect()
    }

    pub fn into_records(self) -> Vec<Record> {
        self.entries.into_iter().map(|entry| entry.record).collect()
    }
}

/// The loaded vocabulary table and the schema mapping built from its header.
#[derive(Debug, Clone)]
pub struct VocabSource {
    pub(crate) table: CsvTable,
    schema: SchemaMapping,
}

impl VocabSource {
    /// Loads the table and maps its header.
    ///
    /// Fails when the file is missing, unreadable, empty, or has no `en`
    /// column.
    pub fn open(path: &Path) -> Result<Self> {
        let table = CsvTable::read(path)?;
        let schema = SchemaMapping::from_header(&table.header);
        schema.require_primary_key(path)?;
        debug!(
            path = %path.display(),
            mapped = ?schema.mapped_fields().map(|(field, _)| field.as_str()).collect::<Vec<_>>(),
            unrecognized = ?schema.unrecognized(),
            "mapped header"
        );
        info!(path = %path.display(), rows = table.rows.len(), "loaded vocabulary table");
        Ok(Self { table, schema })
    }

    pub fn path(&self) -> &Path {
        &self.table.path
    }

    pub fn schema(&self) -> &SchemaMapping {
        &self.schema
    }

    pub fn data_rows(&self) -> usize {
        self.table.rows.len()
    }

    /// Normalizes every data row and keeps those accepted by `selection`.
    pub fn select(&self, selection: Selection) -> RecordSet {
        let mut set = RecordSet::default();
        for (index, row) in self.table.rows.iter().enumerate() {
            set.stats.data_rows += 1;
            let row_number = CsvTable::row_number(index);
            let (record, rating) = match normalize_row(row, &self.schema) {
                RowOutcome::Skip => {
                    set.stats.skipped_missing_en += 1;
                    continue;
                }
                RowOutcome::Record { record, rating } => (record, rating),
            };
            if !selection.includes(&record) {
                set.stats.already_printed += 1;
                continue;
            }
            match rating {
                RatingParse::Unrated | RatingParse::Invalid => set.stats.ratings_defaulted += 1,
                RatingParse::Clamped { raw, rating } => {
                    set.stats.ratings_clamped += 1;
                    debug!(row = row_number, raw, clamped = rating.value(), "clamped rating");
                }
                RatingParse::InRange(_) => {}
            }
            set.entries.push(SourceRecord {
                row: row_number,
                record,
            });
        }
        info!(
            selection = ?selection,
            selected = set.entries.len(),
            skipped = set.stats.skipped_missing_en,
            already_printed = set.stats.already_printed,
            "selected records"
        );
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IngestError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_open_requires_en_column() {
        let file = create_temp_csv("word,rating\ncat,3\n");
        let result = VocabSource::open(file.path());
        assert!(matches!(result, Err(IngestError::MissingColumn { .. })));
    }

    #[test]
    fn test_header_only_table_has_no_records() {
        let file = create_temp_csv("en,rating\n");
        let source = VocabSource::open(file.path()).unwrap();
        let set = source.select(Selection::All);
        assert!(set.is_empty());
        assert_eq!(set.stats.data_rows, 0);
    }

    #[test]
    fn test_select_all_keeps_printed_rows() {
        let file = create_temp_csv(
            "en,printed_at\ncat,2025-01-01 10:00:00\n ,\ndog,\n",
        );
        let source = VocabSource::open(file.path()).unwrap();

        let set = source.select(Selection::All);

        let words: Vec<&str> = set.records().map(|r| r.en.as_str()).collect();
        assert_eq!(words, vec!["cat", "dog"]);
        assert_eq!(set.rows(), vec![2, 4]);
        assert_eq!(set.stats.skipped_missing_en, 1);
        assert_eq!(set.stats.already_printed, 0);
    }

    #[test]
    fn test_select_unprinted_skips_stamped_rows() {
        let file = create_temp_csv(
            "en,printed_at\ncat,2025-01-01 10:00:00\n ,\ndog,\nbird,   \n",
        );
        let source = VocabSource::open(file.path()).unwrap();

        let set = source.select(Selection::Unprinted);

        let words: Vec<&str> = set.records().map(|r| r.en.as_str()).collect();
        assert_eq!(words, vec!["dog", "bird"]);
        assert_eq!(set.rows(), vec![4, 5]);
        assert_eq!(set.stats.already_printed, 1);
        assert_eq!(set.stats.skipped_missing_en, 1);
    }

    #[test]
    fn test_select_counts_rating_fixes() {
        let file = create_temp_csv("en,rating\na,\nb,x\nc,9\nd,2\n");
        let source = VocabSource::open(file.path()).unwrap();

        let set = source.select(Selection::All);

        assert_eq!(set.stats.ratings_defaulted, 2);
        assert_eq!(set.stats.ratings_clamped, 1);
        let ratings: Vec<u8> = set.records().map(|r| r.rating.value()).collect();
        assert_eq!(ratings, vec![1, 1, 5, 2]);
    }

    #[test]
    fn test_missing_rating_column_counts_as_defaulted() {
        let file = create_temp_csv("en,cz\ncat,kočka\ndog,pes\n");
        let source = VocabSource::open(file.path()).unwrap();

        let set = source.select(Selection::All);

        assert_eq!(set.stats.ratings_defaulted, 2);
        assert_eq!(set.stats.ratings_clamped, 0);
        assert!(set.records().all(|r| r.rating.is_default()));
    }
}
