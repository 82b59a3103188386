//! Header-first CSV import and export for the ordered table.
//!
//! Import reads the header row as the column labels and every data row
//! as one table row, inferring cell types the same way form input is
//! parsed. Imported tables are keyed by the synthetic ordinal counter.
//! Export writes the header followed by the rows in current order, and
//! can optionally lead each row with its key components.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use thiserror::Error;

use tabula_core::{index_component_name, TableError, Value};
use tabula_table::OrderedTable;

/// Errors raised during CSV import or export.
#[derive(Debug, Error)]
pub enum InterchangeError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Table(#[from] TableError),

    /// The input had no header row.
    #[error("input has no header row")]
    EmptyHeader,

    /// A data row's field count differed from the header's.
    #[error("row {line} has {actual} fields, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        actual: usize,
    },
}

/// Result type for interchange operations.
pub type InterchangeResult<T> = Result<T, InterchangeError>;

/// Read a CSV file into a fresh synthetic-index table.
pub fn read_csv(path: impl AsRef<Path>) -> InterchangeResult<OrderedTable> {
    read_csv_from(File::open(path)?)
}

/// Read CSV from any reader into a fresh synthetic-index table.
///
/// The first record is the header; duplicate header labels are a
/// [`TableError::DuplicateLabel`]. Rows whose field count differs from
/// the header's are rejected with the 1-based line number.
pub fn read_csv_from<R: Read>(reader: R) -> InterchangeResult<OrderedTable> {
    // Field counts are checked here so the error names the line.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?;
    if headers.is_empty() {
        return Err(InterchangeError::EmptyHeader);
    }
    let columns: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let expected = columns.len();

    let mut table = OrderedTable::with_columns(columns)?;
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() != expected {
            return Err(InterchangeError::RaggedRow {
                line: i + 2,
                expected,
                actual: record.len(),
            });
        }
        let values: Vec<Value> = record.iter().map(Value::parse).collect();
        let key = table.next_ordinal_key();
        table.append_row(key, values)?;
    }
    Ok(table)
}

/// Write the table to a CSV file.
pub fn write_csv(
    path: impl AsRef<Path>,
    table: &OrderedTable,
    preserve_index: bool,
) -> InterchangeResult<()> {
    write_csv_to(File::create(path)?, table, preserve_index)
}

/// Write the table as CSV to any writer.
///
/// With `preserve_index` the key components lead every row, under the
/// component names (an unnamed component writes as `index` for a
/// single-component key, `level_{i}` inside a composite one).
pub fn write_csv_to<W: Write>(
    writer: W,
    table: &OrderedTable,
    preserve_index: bool,
) -> InterchangeResult<()> {
    let mut writer = csv::Writer::from_writer(writer);

    let mut header: Vec<String> = Vec::new();
    if preserve_index {
        header.extend(table.index_names().iter().enumerate().map(|(i, name)| {
            index_component_name(table.index_width(), i, name.as_deref())
        }));
    }
    header.extend(table.column_labels().iter().cloned());
    writer.write_record(&header)?;

    for position in 0..table.row_count() {
        let (key, values) = table.get_row(position)?;
        let mut record: Vec<String> = Vec::new();
        if preserve_index {
            record.extend(key.components().iter().map(|c| c.to_string()));
        }
        record.extend(values.iter().map(|v| v.to_string()));
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}
