use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::rating::Rating;

/// One normalized vocabulary entry.
///
/// Field order is the order of the exported JSON object. `printed_at` is
/// internal print tracking and never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Record {
    pub en: String,
    pub pron: String,
    pub meaning_en: String,
    pub example: String,
    pub cz: String,
    pub rating: Rating,
    #[serde(skip)]
    pub printed_at: String,
    pub note: String,
}

impl Record {
    /// Display text for a field; the rating is rendered as its number.
    pub fn text(&self, field: Field) -> Cow<'_, str> {
        match field {
            Field::En => Cow::Borrowed(&self.en),
            Field::Pron => Cow::Borrowed(&self.pron),
            Field::MeaningEn => Cow::Borrowed(&self.meaning_en),
            Field::Example => Cow::Borrowed(&self.example),
            Field::Cz => Cow::Borrowed(&self.cz),
            Field::Rating => Cow::Owned(self.rating.to_string()),
            Field::PrintedAt => Cow::Borrowed(&self.printed_at),
            Field::Note => Cow::Borrowed(&self.note),
        }
    }

    pub fn is_printed(&self) -> bool {
        !self.printed_at.trim().is_empty()
    }
}
