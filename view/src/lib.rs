//! The view-collaborator boundary.
//!
//! A view is a pure read-only consumer of the table, refreshed after
//! every mutation operation (refresh is idempotent and cheap relative
//! to edit frequency). The view is also where the current row
//! selection lives, since selection is a display concern.

mod recording;
mod text;

pub use recording::RecordingView;
pub use text::TextView;

use tabula_table::OrderedTable;

/// The external display boundary produced to by the controller.
pub trait TableView {
    /// Re-derive the displayed headers and rows from the table.
    fn refresh(&mut self, table: &OrderedTable);

    /// The currently selected row position, if any.
    fn selected_row(&self) -> Option<usize> {
        None
    }
}

/// Displayed column headers: index component names first (bracketed,
/// so they cannot collide with data column labels in the rendering
/// layer), then the data column labels.
///
/// An unnamed component renders as `[index]` for a single-component
/// key and `[level_{i}]` inside a composite one.
pub fn headers(table: &OrderedTable) -> Vec<String> {
    let mut headers: Vec<String> = table
        .index_names()
        .iter()
        .enumerate()
        .map(|(i, name)| format!("[{}]", index_component_name(table, i, name.as_deref())))
        .collect();
    headers.extend(table.column_labels().iter().cloned());
    headers
}

/// Displayed rows: key components first, then cell values, in current
/// row and column order.
pub fn display_rows(table: &OrderedTable) -> Vec<Vec<String>> {
    (0..table.row_count())
        .map(|position| {
            // Positions come from the row count we just read.
            let (key, values) = table
                .get_row(position)
                .expect("row position within bounds");
            key.components()
                .iter()
                .map(|c| c.to_string())
                .chain(values.iter().map(|v| v.to_string()))
                .collect()
        })
        .collect()
}

/// The display name of one index component.
pub fn index_component_name(table: &OrderedTable, position: usize, name: Option<&str>) -> String {
    tabula_core::index_component_name(table.index_width(), position, name)
}
