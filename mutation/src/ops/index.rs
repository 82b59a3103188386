//! Re-keying: the set-index operation.

use tabula_core::{Axis, RowKey, TableError, Value};
use tabula_form::{FormField, FormHost, FormRequest, FormResponse};
use tabula_table::{ScratchLabels, SharedTable};
use tabula_view::index_component_name;

use crate::error::ControllerResult;
use crate::ops::expect_fields;
use crate::result::MutationOutcome;

/// Re-key the table from chosen columns.
///
/// Prompts a True/False choice for "keep old index" and for every
/// current column. On submission: optionally fold the existing key
/// components back in as leading data columns, then designate the
/// chosen columns (in displayed order) as the new key, removing them
/// from the data columns. Choosing zero columns re-keys to a fresh
/// synthetic counter.
///
/// Validation happens up front; any user-caused collision (duplicate
/// prospective keys, a folded index name colliding with a surviving
/// column) is rejected before the table is touched. The fold itself
/// runs in a scratch namespace and restores real labels last, so no
/// intermediate state ever holds two columns with one label.
pub fn set_index<F: FormHost>(
    table: &SharedTable,
    form: &mut F,
) -> ControllerResult<MutationOutcome> {
    let columns: Vec<String> = table.borrow().column_labels().to_vec();
    let true_false = vec!["True".to_string(), "False".to_string()];

    let mut fields = Vec::with_capacity(columns.len() + 1);
    fields.push(choice_field("keep old index", &true_false));
    fields.extend(columns.iter().map(|c| choice_field(c, &true_false)));

    let request = FormRequest::new("Select Index Columns", fields);
    let values = match form.request(request) {
        FormResponse::Submitted(values) => values,
        FormResponse::Cancelled => return Ok(MutationOutcome::Cancelled),
    };
    expect_fields(&values, columns.len() + 1)?;

    let keep_old_index = values[0] == "True";
    let chosen: Vec<String> = columns
        .iter()
        .zip(&values[1..])
        .filter(|(_, v)| v.as_str() == "True")
        .map(|(c, _)| c.clone())
        .collect();

    // Validate everything that user input can break before mutating.
    let new_keys = match prospective_keys(table, &chosen)? {
        Ok(keys) => keys,
        Err(message) => {
            form.notify(&message);
            return Ok(MutationOutcome::Rejected(message));
        }
    };
    let folded = match folded_components(table, keep_old_index, &columns, &chosen) {
        Ok(folded) => folded,
        Err(message) => {
            form.notify(&message);
            return Ok(MutationOutcome::Rejected(message));
        }
    };

    // Apply: park folded key components under scratch labels, re-key,
    // drop the chosen columns, then restore the real labels.
    let mut table = table.borrow_mut();
    let mut scratch = ScratchLabels::new();
    for (position, (name, values)) in folded.iter().enumerate() {
        let live = table.column_labels().to_vec();
        let placeholder = scratch.placeholder_for(name, &live);
        table.append_column(placeholder, values.clone())?;
        let appended = table.column_count() - 1;
        table.move_column(appended, position)?;
    }
    match new_keys {
        Some((keys, names)) => {
            table.set_row_keys(keys, names)?;
            for label in &chosen {
                let position = table.position_of_column(label)?;
                table.delete_column(position)?;
            }
        }
        None => table.reset_index_to_ordinals(),
    }
    for (placeholder, real) in scratch.restore_pairs() {
        let position = table.position_of_column(placeholder)?;
        table.rename_column(position, real.clone())?;
    }

    Ok(MutationOutcome::Applied)
}

fn choice_field(prompt: &str, choices: &[String]) -> FormField {
    FormField::new(prompt)
        .with_choices(choices.to_vec())
        .with_default("False")
}

/// The keys the chosen columns would produce, in displayed order, or a
/// rejection message if they collide. `None` means "no columns chosen,
/// fall back to the synthetic counter".
#[allow(clippy::type_complexity)]
fn prospective_keys(
    table: &SharedTable,
    chosen: &[String],
) -> ControllerResult<Result<Option<(Vec<RowKey>, Vec<Option<String>>)>, String>> {
    if chosen.is_empty() {
        return Ok(Ok(None));
    }
    let table = table.borrow();

    let mut per_row: Vec<Vec<Value>> = vec![Vec::with_capacity(chosen.len()); table.row_count()];
    for label in chosen {
        let position = table.position_of_column(label)?;
        for (row, value) in table.column_values(position)?.into_iter().enumerate() {
            per_row[row].push(value);
        }
    }

    let keys: Vec<RowKey> = per_row.into_iter().map(RowKey::composite).collect();
    for (i, key) in keys.iter().enumerate() {
        if keys[..i].contains(key) {
            let message =
                TableError::duplicate_label(Axis::Row, key.to_string()).to_string();
            return Ok(Err(message));
        }
    }

    let names = chosen.iter().map(|c| Some(c.clone())).collect();
    Ok(Ok(Some((keys, names))))
}

/// The (real name, values) pairs the old index folds back in under, or
/// a rejection message when a name would collide with a surviving
/// column or with another component.
fn folded_components(
    table: &SharedTable,
    keep_old_index: bool,
    columns: &[String],
    chosen: &[String],
) -> Result<Vec<(String, Vec<Value>)>, String> {
    if !keep_old_index {
        return Ok(Vec::new());
    }
    let table = table.borrow();

    let names: Vec<String> = table
        .index_names()
        .iter()
        .enumerate()
        .map(|(i, name)| index_component_name(&table, i, name.as_deref()))
        .collect();

    let surviving: Vec<&String> = columns.iter().filter(|c| !chosen.contains(c)).collect();
    for (i, name) in names.iter().enumerate() {
        if names[..i].contains(name) || surviving.iter().any(|c| *c == name) {
            return Err(TableError::duplicate_label(Axis::Column, name).to_string());
        }
    }

    Ok(names
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            let values = table
                .row_keys()
                .iter()
                .map(|key| key.components()[i].clone())
                .collect();
            (name, values)
        })
        .collect())
}
