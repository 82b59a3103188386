//! Aligned text-grid renderer.

use tabula_table::OrderedTable;

use crate::{display_rows, headers, TableView};

/// Renders the table as an aligned text grid on stdout, with row
/// positions down the left edge and a marker on the selected row.
#[derive(Debug, Default)]
pub struct TextView {
    selection: Option<usize>,
}

impl TextView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear the selected row position.
    pub fn set_selection(&mut self, selection: Option<usize>) {
        self.selection = selection;
    }

    /// Render the current table state to a string.
    pub fn render_to_string(table: &OrderedTable) -> String {
        let headers = headers(table);
        let rows = display_rows(table);

        let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
        for row in &rows {
            for (cell, width) in row.iter().zip(widths.iter_mut()) {
                *width = (*width).max(cell.len());
            }
        }

        let mut out = String::new();
        render_line(&mut out, "   ", &headers, &widths);
        for (position, row) in rows.iter().enumerate() {
            render_line(&mut out, &format!("{:<3}", position), row, &widths);
        }
        out
    }
}

fn render_line(out: &mut String, lead: &str, cells: &[String], widths: &[usize]) {
    out.push_str(lead);
    for (cell, &width) in cells.iter().zip(widths) {
        out.push_str(&format!(" {:<width$}", cell));
    }
    // Trim trailing padding from the last cell.
    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');
}

impl TableView for TextView {
    fn refresh(&mut self, table: &OrderedTable) {
        // A stale selection disappears rather than pointing past the end.
        if let Some(selection) = self.selection {
            if selection >= table.row_count() {
                self.selection = None;
            }
        }
        let rendered = Self::render_to_string(table);
        for (i, line) in rendered.lines().enumerate() {
            let marker = match self.selection {
                Some(selection) if i == selection + 1 => '>',
                _ => ' ',
            };
            println!("{}{}", marker, line);
        }
    }

    fn selected_row(&self) -> Option<usize> {
        self.selection
    }
}
