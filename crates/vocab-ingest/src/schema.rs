//! Header row to column index mapping.

use std::collections::BTreeMap;
use std::path::Path;

use vocab_model::Field;

use crate::error::{IngestError, Result};

/// Position of each recognized field in the current table.
///
/// Built once per read from the header row. Fields missing from the header
/// have no entry and resolve to their default value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaMapping {
    columns: BTreeMap<Field, usize>,
    unrecognized: Vec<String>,
}

impl SchemaMapping {
    /// Maps recognized header cells to their column index.
    ///
    /// A recognized name that appears more than once maps to its last column.
    pub fn from_header<S: AsRef<str>>(header: &[S]) -> Self {
        let mut mapping = Self::default();
        for (index, cell) in header.iter().enumerate() {
            let cell = cell.as_ref();
            match Field::from_header(cell) {
                Some(field) => {
                    mapping.columns.insert(field, index);
                }
                None if !cell.trim().is_empty() => {
                    mapping.unrecognized.push(cell.trim().to_string());
                }
                None => {}
            }
        }
        mapping
    }

    pub fn index_of(&self, field: Field) -> Option<usize> {
        self.columns.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.columns.contains_key(&field)
    }

    /// Mapped fields in canonical field order.
    pub fn mapped_fields(&self) -> impl Iterator<Item = (Field, usize)> + '_ {
        self.columns.iter().map(|(field, index)| (*field, *index))
    }

    /// Non-empty header cells that matched no recognized field.
    pub fn unrecognized(&self) -> &[String] {
        &self.unrecognized
    }

    /// Raw cell of `field` in `row`, if the field is mapped and the row reaches it.
    pub fn cell<'a, S: AsRef<str>>(&self, row: &'a [S], field: Field) -> Option<&'a str> {
        self.index_of(field)
            .and_then(|index| row.get(index))
            .map(AsRef::as_ref)
    }

    /// Fails when the column identifying a record is absent.
    pub fn require_primary_key(&self, path: &Path) -> Result<()> {
        if self.contains(Field::En) {
            Ok(())
        } else {
            Err(IngestError::MissingColumn {
                column: Field::En.as_str().to_string(),
                path: path.to_path_buf(),
            })
        }
    }
}
