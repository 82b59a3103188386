//! The ordered-table storage and its in-place CRUD primitives.

use std::collections::HashMap;

use tabula_core::{Axis, RowKey, TableError, TableResult, Value};

use crate::order::moved_order;

/// A mutable ordered table edited strictly in place.
///
/// Rows are records keyed by column label; each row is identified by a
/// possibly-composite [`RowKey`]. Positions are 0-based offsets into
/// the current row or column order and are distinct from labels.
///
/// Every primitive validates fully before touching storage: it either
/// applies completely or returns an error with the table unchanged.
/// Row-key and column-label uniqueness hold at every externally
/// observable state.
#[derive(Debug)]
pub struct OrderedTable {
    /// Ordered column labels; pairwise distinct.
    columns: Vec<String>,
    /// One record per row; each record's key set equals `columns`.
    records: Vec<HashMap<String, Value>>,
    /// Ordered row keys, parallel to `records`; all of one width.
    row_keys: Vec<RowKey>,
    /// Names of the key components; `None` for an unnamed component.
    index_names: Vec<Option<String>>,
    /// Counter for synthesized ordinal keys.
    next_ordinal: u64,
}

impl OrderedTable {
    /// Create an empty table with the given index component names.
    ///
    /// An empty name list is normalized to a single unnamed component.
    pub fn new(index_names: Vec<Option<String>>) -> Self {
        let index_names = if index_names.is_empty() {
            vec![None]
        } else {
            index_names
        };
        Self {
            columns: Vec::new(),
            records: Vec::new(),
            row_keys: Vec::new(),
            index_names,
            next_ordinal: 0,
        }
    }

    /// Create an empty table indexed by a single synthetic counter.
    pub fn with_synthetic_index() -> Self {
        Self::new(vec![None])
    }

    /// Create an empty synthetic-index table with the given columns.
    pub fn with_columns(columns: Vec<String>) -> TableResult<Self> {
        for (i, label) in columns.iter().enumerate() {
            if columns[..i].contains(label) {
                return Err(TableError::duplicate_label(Axis::Column, label));
            }
        }
        let mut table = Self::with_synthetic_index();
        table.columns = columns;
        Ok(table)
    }

    // ==================== Size & Shape ====================

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.row_keys.len()
    }

    /// Number of data columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of components in every row key.
    pub fn index_width(&self) -> usize {
        self.index_names.len()
    }

    /// Names of the key components, in order.
    pub fn index_names(&self) -> &[Option<String>] {
        &self.index_names
    }

    /// True if the index is the single unnamed synthetic counter.
    pub fn has_synthetic_index(&self) -> bool {
        self.index_names.len() == 1 && self.index_names[0].is_none()
    }

    /// Ordered column labels.
    pub fn column_labels(&self) -> &[String] {
        &self.columns
    }

    /// Ordered row keys.
    pub fn row_keys(&self) -> &[RowKey] {
        &self.row_keys
    }

    // ==================== Lookups ====================

    /// Row key at a position.
    pub fn row_key_at(&self, position: usize) -> TableResult<&RowKey> {
        self.check_row(position)?;
        Ok(&self.row_keys[position])
    }

    /// Column label at a position.
    pub fn column_label_at(&self, position: usize) -> TableResult<&str> {
        self.check_column(position)?;
        Ok(&self.columns[position])
    }

    /// Position of a row key.
    pub fn position_of_row_key(&self, key: &RowKey) -> TableResult<usize> {
        self.row_keys
            .iter()
            .position(|k| k == key)
            .ok_or_else(|| TableError::unknown_label(Axis::Row, key.to_string()))
    }

    /// Position of a column label.
    pub fn position_of_column(&self, label: &str) -> TableResult<usize> {
        self.columns
            .iter()
            .position(|l| l == label)
            .ok_or_else(|| TableError::unknown_label(Axis::Column, label))
    }

    /// The key and cell values of one row, in current column order.
    pub fn get_row(&self, position: usize) -> TableResult<(RowKey, Vec<Value>)> {
        self.check_row(position)?;
        let values = self.record_values(position);
        Ok((self.row_keys[position].clone(), values))
    }

    /// One cell.
    pub fn get_cell(&self, row: usize, column: usize) -> TableResult<&Value> {
        self.check_row(row)?;
        self.check_column(column)?;
        Ok(&self.records[row][self.columns[column].as_str()])
    }

    /// The values of one column, in current row order.
    pub fn column_values(&self, position: usize) -> TableResult<Vec<Value>> {
        self.check_column(position)?;
        let label = self.columns[position].as_str();
        Ok(self
            .records
            .iter()
            .map(|record| record[label].clone())
            .collect())
    }

    // ==================== Row Operations ====================

    /// Insert a row immediately before `position`
    /// (`position == row_count()` appends).
    pub fn insert_row(
        &mut self,
        position: usize,
        key: RowKey,
        values: Vec<Value>,
    ) -> TableResult<()> {
        if position > self.row_count() {
            return Err(TableError::out_of_range(
                Axis::Row,
                position,
                self.row_count(),
            ));
        }
        if key.width() != self.index_width() {
            return Err(TableError::column_mismatch(self.index_width(), key.width()));
        }
        if values.len() != self.column_count() {
            return Err(TableError::column_mismatch(
                self.column_count(),
                values.len(),
            ));
        }
        if self.row_keys.contains(&key) {
            return Err(TableError::duplicate_label(Axis::Row, key.to_string()));
        }

        let record: HashMap<String, Value> =
            self.columns.iter().cloned().zip(values).collect();
        self.note_ordinal(&key);
        self.row_keys.insert(position, key);
        self.records.insert(position, record);
        Ok(())
    }

    /// Insert a row at the end.
    pub fn append_row(&mut self, key: RowKey, values: Vec<Value>) -> TableResult<()> {
        self.insert_row(self.row_count(), key, values)
    }

    /// Remove the row at `position`, returning its key and values.
    pub fn delete_row(&mut self, position: usize) -> TableResult<(RowKey, Vec<Value>)> {
        self.check_row(position)?;
        let values = self.record_values(position);
        let key = self.row_keys.remove(position);
        self.records.remove(position);
        Ok((key, values))
    }

    /// Move the row at `from` so it ends up immediately before the row
    /// that sat at `to` *prior to removal* (`to == row_count()` means
    /// the end). No-op when `from == to`.
    pub fn move_row(&mut self, from: usize, to: usize) -> TableResult<()> {
        self.check_row(from)?;
        if to > self.row_count() {
            return Err(TableError::out_of_range(Axis::Row, to, self.row_count()));
        }
        if from == to {
            return Ok(());
        }
        let order = moved_order(self.row_count(), from, to);
        permute(&mut self.row_keys, &order);
        permute(&mut self.records, &order);
        Ok(())
    }

    // ==================== Column Operations ====================

    /// Add a column at the end, one value per existing row.
    pub fn append_column(
        &mut self,
        label: impl Into<String>,
        values: Vec<Value>,
    ) -> TableResult<()> {
        let label = label.into();
        if self.columns.contains(&label) {
            return Err(TableError::duplicate_label(Axis::Column, label));
        }
        if values.len() != self.row_count() {
            return Err(TableError::column_mismatch(self.row_count(), values.len()));
        }

        for (record, value) in self.records.iter_mut().zip(values) {
            record.insert(label.clone(), value);
        }
        self.columns.push(label);
        Ok(())
    }

    /// Add a column at the end holding `value` in every row.
    pub fn append_column_filled(
        &mut self,
        label: impl Into<String>,
        value: Value,
    ) -> TableResult<()> {
        let values = vec![value; self.row_count()];
        self.append_column(label, values)
    }

    /// Remove the column at `position`, returning its label.
    pub fn delete_column(&mut self, position: usize) -> TableResult<String> {
        self.check_column(position)?;
        let label = self.columns.remove(position);
        for record in &mut self.records {
            record.remove(&label);
        }
        Ok(label)
    }

    /// Move the column at `from` so it ends up immediately before the
    /// column that sat at `to` prior to removal; same contract as
    /// [`OrderedTable::move_row`].
    pub fn move_column(&mut self, from: usize, to: usize) -> TableResult<()> {
        self.check_column(from)?;
        if to > self.column_count() {
            return Err(TableError::out_of_range(
                Axis::Column,
                to,
                self.column_count(),
            ));
        }
        if from == to {
            return Ok(());
        }
        // Records are keyed by label, so only the label order moves.
        let order = moved_order(self.column_count(), from, to);
        permute(&mut self.columns, &order);
        Ok(())
    }

    /// Rename the column at `position`. Renaming a column to its own
    /// label is a no-op.
    pub fn rename_column(
        &mut self,
        position: usize,
        new_label: impl Into<String>,
    ) -> TableResult<()> {
        self.check_column(position)?;
        let new_label = new_label.into();
        if self.columns[position] == new_label {
            return Ok(());
        }
        if self.columns.contains(&new_label) {
            return Err(TableError::duplicate_label(Axis::Column, new_label));
        }

        let old_label = std::mem::replace(&mut self.columns[position], new_label.clone());
        for record in &mut self.records {
            if let Some(value) = record.remove(&old_label) {
                record.insert(new_label.clone(), value);
            }
        }
        Ok(())
    }

    // ==================== Re-keying ====================

    /// Bulk re-key: replace every row key and the index names.
    ///
    /// `new_keys` must hold exactly one key per row, all of the width
    /// given by `index_names`, with no duplicates.
    pub fn set_row_keys(
        &mut self,
        new_keys: Vec<RowKey>,
        index_names: Vec<Option<String>>,
    ) -> TableResult<()> {
        if index_names.is_empty() {
            return Err(TableError::column_mismatch(1, 0));
        }
        if new_keys.len() != self.row_count() {
            return Err(TableError::column_mismatch(self.row_count(), new_keys.len()));
        }
        let width = index_names.len();
        for key in &new_keys {
            if key.width() != width {
                return Err(TableError::column_mismatch(width, key.width()));
            }
        }
        for (i, key) in new_keys.iter().enumerate() {
            if new_keys[..i].contains(key) {
                return Err(TableError::duplicate_label(Axis::Row, key.to_string()));
            }
        }

        self.index_names = index_names;
        self.next_ordinal = 0;
        for key in &new_keys {
            bump_ordinal(&mut self.next_ordinal, key);
        }
        self.row_keys = new_keys;
        Ok(())
    }

    /// Re-key every row to a fresh synthetic counter `0..row_count`.
    pub fn reset_index_to_ordinals(&mut self) {
        self.row_keys = (0..self.row_count())
            .map(|i| RowKey::single(i as i64))
            .collect();
        self.index_names = vec![None];
        self.next_ordinal = self.row_count() as u64;
    }

    /// Allocate the next synthetic counter key.
    pub fn next_ordinal_key(&mut self) -> RowKey {
        let key = RowKey::single(self.next_ordinal as i64);
        self.next_ordinal += 1;
        key
    }

    // ==================== Internal ====================

    fn check_row(&self, position: usize) -> TableResult<()> {
        if position >= self.row_count() {
            return Err(TableError::out_of_range(
                Axis::Row,
                position,
                self.row_count(),
            ));
        }
        Ok(())
    }

    fn check_column(&self, position: usize) -> TableResult<()> {
        if position >= self.column_count() {
            return Err(TableError::out_of_range(
                Axis::Column,
                position,
                self.column_count(),
            ));
        }
        Ok(())
    }

    fn record_values(&self, position: usize) -> Vec<Value> {
        let record = &self.records[position];
        self.columns
            .iter()
            .map(|label| record[label.as_str()].clone())
            .collect()
    }

    /// Keep the ordinal counter above any single integer key so
    /// synthesized keys never collide with ones already present.
    fn note_ordinal(&mut self, key: &RowKey) {
        bump_ordinal(&mut self.next_ordinal, key);
    }
}

fn bump_ordinal(next_ordinal: &mut u64, key: &RowKey) {
    if let [Value::Int(n)] = key.components() {
        if *n >= 0 && *n as u64 >= *next_ordinal {
            *next_ordinal = *n as u64 + 1;
        }
    }
}

/// Reorder `items` so that `items[j] = old[order[j]]`.
fn permute<T>(items: &mut Vec<T>, order: &[usize]) {
    let mut taken: Vec<Option<T>> = items.drain(..).map(Some).collect();
    items.extend(order.iter().map(|&i| taken[i].take().unwrap()));
}
