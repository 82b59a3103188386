//! Shared fixtures for the integration tests.

pub mod prelude {
    pub use tabula_core::{Axis, RowKey, TableError, Value};
    pub use tabula_form::ScriptedForm;
    pub use tabula_mutation::{MutationController, MutationOutcome};
    pub use tabula_table::{OrderedTable, SharedTable};
    pub use tabula_view::RecordingView;

    pub use crate::{controller, people_table};
}

use tabula_core::{RowKey, Value};
use tabula_form::ScriptedForm;
use tabula_mutation::MutationController;
use tabula_table::{OrderedTable, SharedTable};
use tabula_view::RecordingView;

/// A two-row name/age table keyed by the synthetic counter.
pub fn people_table() -> SharedTable {
    let mut table =
        OrderedTable::with_columns(vec!["name".into(), "age".into()]).unwrap();
    table
        .append_row(
            RowKey::single(0i64),
            vec![Value::from("Alice"), Value::from(30i64)],
        )
        .unwrap();
    table
        .append_row(
            RowKey::single(1i64),
            vec![Value::from("Bob"), Value::from(25i64)],
        )
        .unwrap();
    SharedTable::new(table)
}

/// Bind a controller over a clone of the handle, so the caller keeps
/// its own handle for observing mutations.
pub fn controller(
    table: &SharedTable,
    form: ScriptedForm,
) -> MutationController<ScriptedForm, RecordingView> {
    MutationController::new(table.clone(), form, RecordingView::new())
}
