//! CSV reading and writing.

mod table;

pub use table::{CsvTable, HEADER_ROW};
