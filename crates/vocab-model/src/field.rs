use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Column recognized in the vocabulary table header.
///
/// Variants are declared in canonical column order, which is also the order
/// used by [`Field::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// English headword. Rows without it are not records.
    En,
    Pron,
    MeaningEn,
    Example,
    Cz,
    Rating,
    /// Print tracking timestamp, empty until the card has been printed.
    PrintedAt,
    Note,
}

/// Raw value a field takes when its column is absent from the header.
///
/// Consulted for every unmapped field so that defaults live in one place.
pub const FIELD_DEFAULTS: [(Field, &str); 8] = [
    (Field::En, ""),
    (Field::Pron, ""),
    (Field::MeaningEn, ""),
    (Field::Example, ""),
    (Field::Cz, ""),
    (Field::Rating, "1"),
    (Field::PrintedAt, ""),
    (Field::Note, ""),
];

impl Field {
    pub const ALL: [Field; 8] = [
        Field::En,
        Field::Pron,
        Field::MeaningEn,
        Field::Example,
        Field::Cz,
        Field::Rating,
        Field::PrintedAt,
        Field::Note,
    ];

    /// Column name as written in the table header.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::En => "en",
            Field::Pron => "pron",
            Field::MeaningEn => "meaning_en",
            Field::Example => "example",
            Field::Cz => "cz",
            Field::Rating => "rating",
            Field::PrintedAt => "printed_at",
            Field::Note => "note",
        }
    }

    /// Matches a raw header cell: trimmed, case-insensitive, BOM tolerant.
    pub fn from_header(raw: &str) -> Option<Field> {
        let normalized = raw.trim_start_matches('\u{feff}').trim().to_lowercase();
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == normalized)
    }

    /// Default raw value from [`FIELD_DEFAULTS`].
    pub fn default_value(&self) -> &'static str {
        FIELD_DEFAULTS
            .iter()
            .find(|(field, _)| field == self)
            .map_or("", |(_, value)| *value)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::from_header(s).ok_or_else(|| format!("Unknown field: {}", s.trim()))
    }
}
