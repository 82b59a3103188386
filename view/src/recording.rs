//! Recording view for tests.

use tabula_table::OrderedTable;

use crate::{display_rows, headers, TableView};

/// A view that snapshots what it was last shown and counts refreshes,
/// standing in for the screen widget. Selection is settable so tests
/// can drive selection-dependent operations.
#[derive(Debug, Default)]
pub struct RecordingView {
    refreshes: usize,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    selection: Option<usize>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of refreshes received.
    pub fn refreshes(&self) -> usize {
        self.refreshes
    }

    /// The headers from the last refresh.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// The rows from the last refresh.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Set or clear the selected row position.
    pub fn set_selection(&mut self, selection: Option<usize>) {
        self.selection = selection;
    }
}

impl TableView for RecordingView {
    fn refresh(&mut self, table: &OrderedTable) {
        self.refreshes += 1;
        self.headers = headers(table);
        self.rows = display_rows(table);
    }

    fn selected_row(&self) -> Option<usize> {
        self.selection
    }
}
