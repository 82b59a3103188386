//! Column operations: append, move, delete.

use tabula_core::Value;
use tabula_form::{FormField, FormHost, FormRequest, FormResponse};
use tabula_table::SharedTable;

use crate::error::ControllerResult;
use crate::ops::row::reject_unknown_choice;
use crate::ops::{expect_fields, numbered, reject_duplicate, resolve_choice};
use crate::result::MutationOutcome;

/// Append a new column: prompts for the column name and a value for
/// every existing row. A name collision is a rejection, not an error,
/// and leaves the table untouched.
pub fn append_column<F: FormHost>(
    table: &SharedTable,
    form: &mut F,
) -> ControllerResult<MutationOutcome> {
    let (fields, row_count) = {
        let table = table.borrow();
        let mut fields = vec![FormField::new("Column Name")];
        fields.extend(
            table
                .row_keys()
                .iter()
                .map(|key| FormField::new(key.to_string()).with_default("")),
        );
        (fields, table.row_count())
    };

    let request = FormRequest::new("Append Column", fields);
    let values = match form.request(request) {
        FormResponse::Submitted(values) => values,
        FormResponse::Cancelled => return Ok(MutationOutcome::Cancelled),
    };
    expect_fields(&values, row_count + 1)?;

    let name = values[0].clone();
    let cells: Vec<Value> = values[1..].iter().map(|v| Value::parse(v)).collect();
    match table.borrow_mut().append_column(name, cells) {
        Ok(()) => Ok(MutationOutcome::Applied),
        Err(err) => reject_duplicate(form, err),
    }
}

/// Move a column chosen from an enumerated prompt to before another,
/// or to the end.
pub fn move_column<F: FormHost>(
    table: &SharedTable,
    form: &mut F,
) -> ControllerResult<MutationOutcome> {
    let (choices_from, choices_to) = {
        let table = table.borrow();
        let labels = table.column_labels().to_vec();
        let mut with_end = labels.clone();
        with_end.push("move to end".to_string());
        (numbered(&labels), numbered(&with_end))
    };

    let request = FormRequest::new(
        "Move Column",
        vec![
            FormField::new("Column To Move:").with_choices(choices_from.clone()),
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

    table.borrow_mut().move_column(from, to)?;
    Ok(MutationOutcome::Applied)
}

/// Delete a column chosen from an enumerated prompt.
pub fn delete_column<F: FormHost>(
    table: &SharedTable,
    form: &mut F,
) -> ControllerResult<MutationOutcome> {
    let choices = numbered(&table.borrow().column_labels().to_vec());

    let request = FormRequest::new(
        "Delete Column",
        vec![FormField::new("Column To Delete:").with_choices(choices.clone())],
    );
    let values = match form.request(request) {
        FormResponse::Submitted(values) => values,
        FormResponse::Cancelled => return Ok(MutationOutcome::Cancelled),
    };
    expect_fields(&values, 1)?;

    let Some(position) = resolve_choice(&choices, &values[0]) else {
        return reject_unknown_choice(form, &values[0]);
    };

    table.borrow_mut().delete_column(position)?;
    Ok(MutationOutcome::Applied)
}
