//! JSON export documents.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use vocab_ingest::write_atomic;
use vocab_model::{Rating, Record};

/// UTC timestamp format of `version` and `exported_at`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Tells the front end when the snapshot was produced and how large it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FreshnessMarker {
    pub version: String,
    pub count: usize,
}

/// Rating statistics over the exported records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportReport {
    pub exported_at: String,
    pub total_words: usize,
    /// Records still at the default rating; equals bucket `"1"`.
    pub words_without_rating: usize,
    /// Counts keyed `"1"` through `"5"`, summing to `total_words`.
    pub rating_distribution: BTreeMap<String, usize>,
}

/// All exported records at one point in time.
#[derive(Debug, Clone, Copy)]
pub struct ExportSnapshot<'a> {
    records: &'a [Record],
    generated_at: DateTime<Utc>,
}

impl<'a> ExportSnapshot<'a> {
    pub fn new(records: &'a [Record], generated_at: DateTime<Utc>) -> Self {
        Self {
            records,
            generated_at,
        }
    }

    pub fn records(&self) -> &'a [Record] {
        self.records
    }

    pub fn timestamp(&self) -> String {
        self.generated_at.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn freshness(&self) -> FreshnessMarker {
        FreshnessMarker {
            version: self.timestamp(),
            count: self.records.len(),
        }
    }

    pub fn report(&self) -> ExportReport {
        let distribution = rating_distribution(self.records);
        ExportReport {
            exported_at: self.timestamp(),
            total_words: self.records.len(),
            words_without_rating: distribution.get(&Rating::DEFAULT).copied().unwrap_or(0),
            rating_distribution: distribution
                .into_iter()
                .map(|(rating, count)| (rating.to_string(), count))
                .collect(),
        }
    }
}

/// Per-rating counts, one entry for every valid rating.
pub fn rating_distribution(records: &[Record]) -> BTreeMap<Rating, usize> {
    let mut counts: BTreeMap<Rating, usize> = Rating::all().map(|r| (r, 0)).collect();
    for record in records {
        *counts.entry(record.rating).or_default() += 1;
    }
    counts
}

/// Destination of each export document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTargets {
    pub vocab: PathBuf,
    pub latest: PathBuf,
    pub report: PathBuf,
}

/// Writes the snapshot, freshness marker and report.
///
/// All three documents are serialized before the first file is written.
/// Returns the written paths in write order.
pub fn write_export(
    snapshot: &ExportSnapshot<'_>,
    targets: &ExportTargets,
) -> Result<Vec<PathBuf>> {
    let vocab = to_json(&snapshot.records()).context("serialize vocabulary snapshot")?;
    let latest = to_json(&snapshot.freshness()).context("serialize freshness marker")?;
    let report = to_json(&snapshot.report()).context("serialize export report")?;

    let mut written = Vec::with_capacity(3);
    for (path, bytes) in [
        (&targets.vocab, vocab),
        (&targets.latest, latest),
        (&targets.report, report),
    ] {
        write_atomic(path, &bytes).with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), "written");
        written.push(path.clone());
    }
    Ok(written)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::fs;
    use tempfile::tempdir;

    fn record(en: &str, rating: u8) -> Record {
        Record {
            en: en.to_string(),
            rating: Rating::new(rating).unwrap(),
            ..Record::default()
        }
    }

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 2, h, m, s).unwrap()
    }

    #[test]
    fn test_report_for_example_records() {
        let records = vec![record("cat", 1), record("dog", 5)];
        let snapshot = ExportSnapshot::new(&records, at(3, 4, 5));

        let json = String::from_utf8(to_json(&snapshot.report()).unwrap()).unwrap();

        insta::assert_snapshot!(json, @r#"
        {
          "exported_at": "2026-01-02T03:04:05",
          "total_words": 2,
          "words_without_rating": 1,
          "rating_distribution": {
            "1": 1,
            "2": 0,
            "3": 0,
            "4": 0,
            "5": 1
          }
        }
        "#);
    }

    #[test]
    fn test_freshness_marker() {
        let records = vec![record("cat", 2), record("dog", 3), record("owl", 3)];
        let snapshot = ExportSnapshot::new(&records, at(23, 59, 1));

        let json = String::from_utf8(to_json(&snapshot.freshness()).unwrap()).unwrap();

        insta::assert_snapshot!(json, @r#"
        {
          "version": "2026-01-02T23:59:01",
          "count": 3
        }
        "#);
    }

    #[test]
    fn test_distribution_sums_to_total() {
        let records: Vec<Record> = (0..23u8)
            .map(|i| record(&format!("w{i}"), i % 5 + 1))
            .collect();
        let report = ExportSnapshot::new(&records, at(0, 0, 0)).report();

        let sum: usize = report.rating_distribution.values().sum();
        assert_eq!(sum, report.total_words);
        assert_eq!(report.words_without_rating, report.rating_distribution["1"]);
        assert_eq!(
            report.rating_distribution.keys().collect::<Vec<_>>(),
            vec!["1", "2", "3", "4", "5"]
        );
    }

    #[test]
    fn test_report_is_stable_across_runs() {
        let records = vec![record("a", 4), record("b", 1), record("c", 4)];
        let first = ExportSnapshot::new(&records, at(1, 0, 0)).report();
        let second = ExportSnapshot::new(&records, at(2, 0, 0)).report();

        assert_ne!(first.exported_at, second.exported_at);
        assert_eq!(first.total_words, second.total_words);
        assert_eq!(first.rating_distribution, second.rating_distribution);
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = ExportSnapshot::new(&[], at(0, 0, 0));
        let report = snapshot.report();
        assert_eq!(report.total_words, 0);
        assert!(report.rating_distribution.values().all(|count| *count == 0));
        assert_eq!(to_json(&snapshot.records()).unwrap(), b"[]");
    }

    #[test]
    fn test_write_export_creates_all_documents() {
        let dir = tempdir().unwrap();
        let targets = ExportTargets {
            vocab: dir.path().join("docs/data/vocab.json"),
            latest: dir.path().join("docs/data/latest.json"),
            report: dir.path().join("out/report.json"),
        };
        let mut cat = record("cat", 2);
        cat.cz = "kočka".to_string();
        cat.printed_at = "2025-01-01 00:00:00".to_string();
        let records = vec![cat];

        let written = write_export(&ExportSnapshot::new(&records, at(8, 0, 0)), &targets).unwrap();

        assert_eq!(
            written,
            vec![targets.vocab.clone(), targets.latest.clone(), targets.report.clone()]
        );

        let vocab = fs::read_to_string(&targets.vocab).unwrap();
        assert_eq!(
            vocab,
            "[\n  {\n    \"en\": \"cat\",\n    \"pron\": \"\",\n    \"meaning_en\": \"\",\n    \
             \"example\": \"\",\n    \"cz\": \"kočka\",\n    \"rating\": 2,\n    \
             \"note\": \"\"\n  }\n]"
        );
        assert!(!vocab.contains("printed_at"));
        let latest: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&targets.latest).unwrap()).unwrap();
        assert_eq!(latest["count"], 1);
        assert!(targets.report.exists());
        assert!(!dir.path().join("docs/data/vocab.json.tmp").exists());
    }
}
