//! Whole-file CSV table with in-place cell updates.

use std::fs;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Terminator, WriterBuilder};

use crate::error::{IngestError, Result};
use crate::persist::write_atomic;

/// Row number of the header; data rows start right after it.
pub const HEADER_ROW: usize = 1;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// The complete vocabulary table held in memory.
///
/// Cells are kept exactly as read so that a rewrite only changes the cells
/// that were explicitly updated. A leading BOM and the header's line ending
/// are restored on rewrite. Blank lines are not rows and are not written
/// back. Row numbers are 1-based with the header on row [`HEADER_ROW`].
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub path: PathBuf,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    bom: bool,
    crlf: bool,
}

impl CsvTable {
    /// Loads the whole file. The file handle is released before returning.
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                IngestError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                IngestError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        let bom = bytes.starts_with(UTF8_BOM);
        let crlf = header_ends_with_crlf(&bytes);

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes.as_slice());
        let mut records = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| IngestError::CsvParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
            records.push(record.iter().map(str::to_string).collect::<Vec<_>>());
        }

        let mut records = records.into_iter();
        let Some(header) = records.next() else {
            return Err(IngestError::EmptySource {
                path: path.to_path_buf(),
            });
        };
        Ok(Self {
            path: path.to_path_buf(),
            header,
            rows: records.collect(),
            bom,
            crlf,
        })
    }

    /// Row number of the data row at `index` in [`CsvTable::rows`].
    pub fn row_number(index: usize) -> usize {
        index + HEADER_ROW + 1
    }

    /// Row number of the last data row, or [`HEADER_ROW`] for a header-only table.
    pub fn last_row_number(&self) -> usize {
        HEADER_ROW + self.rows.len()
    }

    /// Overwrites one cell, padding a short row with empty cells.
    pub fn set_cell(&mut self, row: usize, column: usize, value: &str) -> Result<()> {
        let last_row = self.last_row_number();
        if row <= HEADER_ROW || row > last_row {
            return Err(IngestError::RowOutOfRange {
                row,
                last_row,
                path: self.path.clone(),
            });
        }
        let cells = &mut self.rows[row - HEADER_ROW - 1];
        if cells.len() <= column {
            cells.resize(column + 1, String::new());
        }
        cells[column] = value.to_string();
        Ok(())
    }

    /// Serializes the table, keeping the line ending style of the source.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let terminator = if self.crlf {
            Terminator::CRLF
        } else {
            Terminator::Any(b'\n')
        };
        let mut out = Vec::new();
        if self.bom {
            out.extend_from_slice(UTF8_BOM);
        }
        let mut writer = WriterBuilder::new()
            .flexible(true)
            .terminator(terminator)
            .from_writer(out);
        for row in std::iter::once(&self.header).chain(self.rows.iter()) {
            writer.write_record(row).map_err(|e| self.csv_error(&e))?;
        }
        writer.into_inner().map_err(|e| IngestError::CsvParse {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    /// Rewrites the whole file atomically.
    pub fn save(&self) -> Result<()> {
        let bytes = self.to_bytes()?;
        write_atomic(&self.path, &bytes)
    }

    fn csv_error(&self, error: &csv::Error) -> IngestError {
        IngestError::CsvParse {
            path: self.path.clone(),
            message: error.to_string(),
        }
    }
}

/// True when the first line break outside a quoted cell is `\r\n`.
fn header_ends_with_crlf(bytes: &[u8]) -> bool {
    let mut quoted = false;
    for (index, &byte) in bytes.iter().enumerate() {
        match byte {
            b'"' => quoted = !quoted,
            b'\n' if !quoted => return index > 0 && bytes[index - 1] == b'\r',
            _ => {}
        }
    }
    false
}
