//! Row to record normalization.
//!
//! Turns one raw table row into a [`Record`] or a skip signal. Problems that
//! only affect optional data are resolved here and never fail the read:
//!
//! - unmapped fields and cells missing from short rows take the default from
//!   [`vocab_model::FIELD_DEFAULTS`]
//! - text cells are trimmed
//! - ratings are parsed leniently, truncated and clamped into `1..=5`

use vocab_model::{Field, Rating, Record};

use crate::schema::SchemaMapping;

/// How a raw rating cell was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingParse {
    /// Empty cell or the literal `None`.
    Unrated,
    /// Not a number.
    Invalid,
    InRange(Rating),
    /// Numeric but outside `1..=5` after truncation.
    Clamped { raw: i64, rating: Rating },
}

impl RatingParse {
    pub fn rating(self) -> Rating {
        match self {
            RatingParse::Unrated | RatingParse::Invalid => Rating::DEFAULT,
            RatingParse::InRange(rating) | RatingParse::Clamped { rating, .. } => rating,
        }
    }

    /// True when the cell did not carry a usable number.
    pub fn is_defaulted(self) -> bool {
        matches!(self, RatingParse::Unrated | RatingParse::Invalid)
    }
}

/// Result of normalizing one data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// Missing or blank `en`; the row is not a record.
    Skip,
    Record { record: Record, rating: RatingParse },
}

/// Parses a raw rating cell.
///
/// Fractional input is truncated toward zero before clamping, so `4.9`
/// becomes 4 and `0.5` becomes 1.
pub fn parse_rating(raw: &str) -> RatingParse {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "None" {
        return RatingParse::Unrated;
    }
    let value = match trimmed.parse::<f64>() {
        Ok(value) if !value.is_nan() => value,
        _ => return RatingParse::Invalid,
    };
    // `as` saturates, which also maps infinities onto the nearest bound.
    let truncated = value.trunc() as i64;
    let rating = Rating::clamped(truncated);
    if i64::from(rating.value()) == truncated {
        RatingParse::InRange(rating)
    } else {
        RatingParse::Clamped {
            raw: truncated,
            rating,
        }
    }
}

/// Normalizes one data row against the schema mapping.
pub fn normalize_row<S: AsRef<str>>(row: &[S], schema: &SchemaMapping) -> RowOutcome {
    let text = |field: Field| -> String {
        schema
            .cell(row, field)
            .unwrap_or_else(|| field.default_value())
            .trim()
            .to_string()
    };

    let en = text(Field::En);
    if en.is_empty() {
        return RowOutcome::Skip;
    }

    let rating = schema
        .cell(row, Field::Rating)
        .map_or(RatingParse::Unrated, parse_rating);

    let record = Record {
        en,
        pron: text(Field::Pron),
        meaning_en: text(Field::MeaningEn),
        example: text(Field::Example),
        cz: text(Field::Cz),
        rating: rating.rating(),
        printed_at: text(Field::PrintedAt),
        note: text(Field::Note),
    };
    RowOutcome::Record { record, rating }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn schema(header: &[&str]) -> SchemaMapping {
        SchemaMapping::from_header(header)
    }

    fn record_of(outcome: RowOutcome) -> Record {
        match outcome {
            RowOutcome::Record { record, .. } => record,
            RowOutcome::Skip => panic!("expected a record"),
        }
    }

    #[test]
    fn test_parse_rating_defaults() {
        assert_eq!(parse_rating(""), RatingParse::Unrated);
        assert_eq!(parse_rating("   "), RatingParse::Unrated);
        assert_eq!(parse_rating("None"), RatingParse::Unrated);
        assert_eq!(parse_rating("abc"), RatingParse::Invalid);
        assert_eq!(parse_rating("NaN"), RatingParse::Invalid);
        assert_eq!(parse_rating("none").rating(), Rating::DEFAULT);
    }

    #[test]
    fn test_parse_rating_truncates_then_clamps() {
        assert_eq!(parse_rating("4.9").rating().value(), 4);
        assert_eq!(parse_rating(" 3 ").rating().value(), 3);
        assert_eq!(parse_rating("0.5").rating().value(), 1);
        assert_eq!(parse_rating("-2").rating().value(), 1);
        assert_eq!(
            parse_rating("7"),
            RatingParse::Clamped {
                raw: 7,
                rating: Rating::MAX
            }
        );
        assert_eq!(parse_rating("5.99"), RatingParse::InRange(Rating::MAX));
        assert_eq!(parse_rating("inf").rating(), Rating::MAX);
        assert_eq!(parse_rating("-inf").rating(), Rating::MIN);
    }

    #[test]
    fn test_blank_en_is_skipped() {
        let mapping = schema(&["en", "rating"]);
        assert_eq!(normalize_row(&[" ", "3"], &mapping), RowOutcome::Skip);
        assert_eq!(normalize_row(&["", "3"], &mapping), RowOutcome::Skip);
        assert_eq!(normalize_row::<&str>(&[], &mapping), RowOutcome::Skip);
    }

    #[test]
    fn test_unmapped_en_is_skipped() {
        let mapping = schema(&["cz"]);
        assert_eq!(normalize_row(&["kočka"], &mapping), RowOutcome::Skip);
    }

    #[test]
    fn test_values_are_trimmed() {
        let mapping = schema(&["en", "cz", "note"]);
        let record = record_of(normalize_row(&["  cat ", " kočka", "pet  "], &mapping));
        assert_eq!(record.en, "cat");
        assert_eq!(record.cz, "kočka");
        assert_eq!(record.note, "pet");
    }

    #[test]
    fn test_missing_columns_use_defaults() {
        let mapping = schema(&["en"]);
        let outcome = normalize_row(&["cat"], &mapping);
        let RowOutcome::Record { record, rating } = outcome else {
            panic!("expected a record");
        };
        assert_eq!(record.rating, Rating::DEFAULT);
        assert_eq!(rating, RatingParse::Unrated);
        assert!(rating.is_defaulted());
        assert_eq!(record.pron, "");
        assert_eq!(record.printed_at, "");
    }

    #[test]
    fn test_short_row_uses_defaults() {
        let mapping = schema(&["en", "pron", "rating", "printed_at"]);
        let outcome = normalize_row(&["dog", "dɒɡ"], &mapping);
        let RowOutcome::Record { record, rating } = outcome else {
            panic!("expected a record");
        };
        assert_eq!(record.pron, "dɒɡ");
        assert_eq!(record.rating, Rating::DEFAULT);
        assert_eq!(rating, RatingParse::Unrated);
        assert!(!record.is_printed());
    }

    proptest! {
        #[test]
        fn rating_always_in_range(raw in ".*") {
            let value = parse_rating(&raw).rating().value();
            prop_assert!((1..=5).contains(&value));
        }

        #[test]
        fn numeric_rating_truncates_and_clamps(value in -1_000.0f64..1_000.0) {
            let expected = (value.trunc() as i64).clamp(1, 5);
            let parsed = parse_rating(&value.to_string()).rating();
            prop_assert_eq!(i64::from(parsed.value()), expected);
        }

        #[test]
        fn non_numeric_rating_defaults(raw in "[a-zA-Z ]*") {
            // Words that Rust parses as floats.
            let lower = raw.trim().to_lowercase();
            prop_assume!(!["inf", "infinity", "nan"].contains(&lower.as_str()));
            prop_assert_eq!(parse_rating(&raw).rating(), Rating::DEFAULT);
        }

        #[test]
        fn whitespace_en_never_yields_record(en in "[ \t]*", rating in "[0-9]") {
            let mapping = SchemaMapping::from_header(&["en", "rating"]);
            prop_assert_eq!(normalize_row(&[en.as_str(), rating.as_str()], &mapping), RowOutcome::Skip);
        }
    }
}
