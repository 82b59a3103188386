//! Mutation operation implementations.
//!
//! Each operation family (row edits, column edits, re-keying) lives in
//! its own module. Operations take the shared table handle and the
//! form host; the controller wraps them with the view refresh.

mod column;
mod index;
mod row;

pub use column::{append_column, delete_column, move_column};
pub use index::set_index;
pub use row::{append_row, delete_row, edit_row, insert_row, move_row};

use tabula_core::{RowKey, TableError, Value};
use tabula_form::{FormField, FormHost, FormRequest};
use tabula_table::OrderedTable;
use tabula_view::index_component_name;

use crate::error::{ControllerError, ControllerResult};
use crate::result::MutationOutcome;

/// "0. label" display form for enumerated position choices, so equal
/// labels at different positions stay distinguishable.
fn numbered(items: &[String]) -> Vec<String> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i, item))
        .collect()
}

/// Resolve an enumerated answer back to its position.
fn resolve_choice(choices: &[String], answer: &str) -> Option<usize> {
    choices.iter().position(|c| c == answer)
}

/// Check the form host honored the field count.
fn expect_fields(values: &[String], expected: usize) -> ControllerResult<()> {
    if values.len() != expected {
        return Err(ControllerError::FieldMismatch {
            expected,
            actual: values.len(),
        });
    }
    Ok(())
}

/// Report a user-caused label collision through the form host and turn
/// it into a rejection; anything else is a contract violation.
fn reject_duplicate<F: FormHost>(
    form: &mut F,
    err: TableError,
) -> ControllerResult<MutationOutcome> {
    match err {
        TableError::DuplicateLabel { .. } => {
            let message = err.to_string();
            form.notify(&message);
            Ok(MutationOutcome::Rejected(message))
        }
        other => Err(other.into()),
    }
}

/// Build the row-editor form: one field per index component, then one
/// per data column, pre-filled from `prefill` when editing.
fn row_form(table: &OrderedTable, title: &str, prefill: Option<usize>) -> ControllerResult<FormRequest> {
    let defaults: Option<(RowKey, Vec<Value>)> = match prefill {
        Some(position) => Some(table.get_row(position)?),
        None => None,
    };

    let mut fields = Vec::with_capacity(table.index_width() + table.column_count());
    for (i, name) in table.index_names().iter().enumerate() {
        let mut field = FormField::new(index_component_name(table, i, name.as_deref()));
        if let Some((key, _)) = &defaults {
            field = field.with_default(key.components()[i].to_string());
        }
        fields.push(field);
    }
    for (i, label) in table.column_labels().iter().enumerate() {
        let mut field = FormField::new(label.clone());
        if let Some((_, values)) = &defaults {
            field = field.with_default(values[i].to_string());
        }
        fields.push(field);
    }
    Ok(FormRequest::new(title, fields))
}

/// Parse a row-editor submission into a key and cell values.
///
/// When the index is the single synthetic counter and the key field
/// was left empty, the key is synthesized from the ordinal counter.
fn parse_row_submission(
    table: &mut OrderedTable,
    values: &[String],
) -> ControllerResult<(RowKey, Vec<Value>)> {
    expect_fields(values, table.index_width() + table.column_count())?;
    let (key_fields, cell_fields) = values.split_at(table.index_width());

    let key = if table.has_synthetic_index() && key_fields[0].is_empty() {
        table.next_ordinal_key()
    } else {
        RowKey::composite(key_fields.iter().map(|f| Value::parse(f)).collect())
    };
    let cells = cell_fields.iter().map(|f| Value::parse(f)).collect();
    Ok((key, cells))
}
