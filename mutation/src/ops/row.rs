//! Row operations: append, insert-before-selection, edit, move, delete.

use tabula_form::{FormField, FormHost, FormRequest, FormResponse};
use tabula_table::SharedTable;

use crate::error::ControllerResult;
use crate::ops::{
    expect_fields, numbered, parse_row_submission, reject_duplicate, resolve_choice, row_form,
};
use crate::result::MutationOutcome;

/// Append a new row at the end of the table.
pub fn append_row<F: FormHost>(
    table: &SharedTable,
    form: &mut F,
) -> ControllerResult<MutationOutcome> {
    let position = table.borrow().row_count();
    insert_row_at(table, form, position)
}

/// Insert a new row immediately before the selected row; silent no-op
/// without a selection.
pub fn insert_row<F: FormHost>(
    table: &SharedTable,
    form: &mut F,
    selection: Option<usize>,
) -> ControllerResult<MutationOutcome> {
    let Some(position) = selection else {
        return Ok(MutationOutcome::NoSelection);
    };
    insert_row_at(table, form, position)
}

fn insert_row_at<F: FormHost>(
    table: &SharedTable,
    form: &mut F,
    position: usize,
) -> ControllerResult<MutationOutcome> {
    let request = row_form(&table.borrow(), "Row Editor", None)?;
    let values = match form.request(request) {
        FormResponse::Submitted(values) => values,
        FormResponse::Cancelled => return Ok(MutationOutcome::Cancelled),
    };

    let mut table = table.borrow_mut();
    let (key, cells) = parse_row_submission(&mut table, &values)?;
    match table.insert_row(position, key, cells) {
        Ok(()) => Ok(MutationOutcome::Applied),
        Err(err) => reject_duplicate(form, err),
    }
}

/// Edit the selected row, replacing its key and/or values atomically.
///
/// Applied as delete-then-insert at the same position: the row is
/// removed before the new key is validated, so re-submitting the row's
/// own key never trips the duplicate check. On failure the original
/// row is restored before returning.
pub fn edit_row<F: FormHost>(
    table: &SharedTable,
    form: &mut F,
    selection: Option<usize>,
) -> ControllerResult<MutationOutcome> {
    let Some(position) = selection else {
        return Ok(MutationOutcome::NoSelection);
    };

    let request = row_form(&table.borrow(), "Row Editor", Some(position))?;
    let values = match form.request(request) {
        FormResponse::Submitted(values) => values,
        FormResponse::Cancelled => return Ok(MutationOutcome::Cancelled),
    };

    let mut table = table.borrow_mut();
    let (old_key, old_values) = table.delete_row(position)?;
    let parsed = parse_row_submission(&mut table, &values);
    let applied = match parsed {
        Ok((key, cells)) => table.insert_row(position, key, cells),
        Err(err) => {
            table.insert_row(position, old_key, old_values)?;
            return Err(err);
        }
    };
    match applied {
        Ok(()) => Ok(MutationOutcome::Applied),
        Err(err) => {
            table.insert_row(position, old_key, old_values)?;
            reject_duplicate(form, err)
        }
    }
}

/// Move a row chosen from an enumerated prompt to before another, or
/// to the end.
pub fn move_row<F: FormHost>(
    table: &SharedTable,
    form: &mut F,
) -> ControllerResult<MutationOutcome> {
    let (choices_from, choices_to) = {
        let table = table.borrow();
        let labels: Vec<String> = table.row_keys().iter().map(|k| k.to_string()).collect();
        let mut with_end = labels.clone();
        with_end.push("move to end".to_string());
        (numbered(&labels), numbered(&with_end))
    };

    let request = FormRequest::new(
        "Move Row",
        vec![
            FormField::new("Row To Move:").with_choices(choices_from.clone()),
            FormField::new("Move Before:").with_choices(choices_to.clone()),
        ],
    );
    let values = match form.request(request) {
        FormResponse::Submitted(values) => values,
        FormResponse::Cancelled => return Ok(MutationOutcome::Cancelled),
    };
    expect_fields(&values, 2)?;

    let Some(from) = resolve_choice(&choices_from, &values[0]) else {
        return reject_unknown_choice(form, &values[0]);
    };
    let Some(to) = resolve_choice(&choices_to, &values[1]) else {
        return reject_unknown_choice(form, &values[1]);
    };

    // `move_row` targets pre-removal positions, so the resolved
    // choices pass through unadjusted.
    table.borrow_mut().move_row(from, to)?;
    Ok(MutationOutcome::Applied)
}

/// Delete the selected row; silent no-op without a selection.
pub fn delete_row(
    table: &SharedTable,
    selection: Option<usize>,
) -> ControllerResult<MutationOutcome> {
    let Some(position) = selection else {
        return Ok(MutationOutcome::NoSelection);
    };
    table.borrow_mut().delete_row(position)?;
    Ok(MutationOutcome::Applied)
}

pub(super) fn reject_unknown_choice<F: FormHost>(
    form: &mut F,
    answer: &str,
) -> ControllerResult<MutationOutcome> {
    let message = format!("not one of the offered choices: {}", answer);
    form.notify(&message);
    Ok(MutationOutcome::Rejected(message))
}
