pub mod field;
pub mod rating;
pub mod record;

pub use field::{FIELD_DEFAULTS, Field};
pub use rating::Rating;
pub use record::Record;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_in_export_order() {
        let record = Record {
            en: "cat".to_string(),
            pron: "kæt".to_string(),
            meaning_en: "a small domesticated feline".to_string(),
            example: "The cat sat.".to_string(),
            cz: "kočka".to_string(),
            rating: Rating::new(3).expect("valid rating"),
            printed_at: "2025-01-01 10:00:00".to_string(),
            note: String::new(),
        };
        let json = serde_json::to_string(&record).expect("serialize record");
        assert_eq!(
            json,
            r#"{"en":"cat","pron":"kæt","meaning_en":"a small domesticated feline","example":"The cat sat.","cz":"kočka","rating":3,"note":""}"#
        );
    }
}
