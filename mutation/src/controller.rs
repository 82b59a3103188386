//! The controller coordinating table, form host, and view.

use tabula_form::FormHost;
use tabula_table::SharedTable;
use tabula_view::TableView;

use crate::error::ControllerResult;
use crate::ops;
use crate::result::MutationOutcome;

/// Coordinates mutation operations against one shared table.
///
/// Every operation runs the same way: gather input through the form
/// host, apply nothing on cancellation, validate and apply otherwise,
/// and always finish by refreshing the view exactly once. The table
/// handle held here is a clone; callers keep their own and observe
/// every mutation in place.
pub struct MutationController<F: FormHost, V: TableView> {
    table: SharedTable,
    form: F,
    view: V,
}

impl<F: FormHost, V: TableView> MutationController<F, V> {
    /// Bind a controller to a table, form host, and view. The view is
    /// refreshed immediately so it starts in sync.
    pub fn new(table: SharedTable, form: F, mut view: V) -> Self {
        view.refresh(&table.borrow());
        Self { table, form, view }
    }

    /// The shared table handle.
    pub fn table(&self) -> &SharedTable {
        &self.table
    }

    /// The form host collaborator.
    pub fn form(&self) -> &F {
        &self.form
    }

    /// The view collaborator.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The view collaborator, mutably (e.g. to change the selection).
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Append a new row at the end of the table.
    pub fn append_row(&mut self) -> ControllerResult<MutationOutcome> {
        let outcome = ops::append_row(&self.table, &mut self.form);
        self.finish(outcome)
    }

    /// Insert a new row before the selected row.
    pub fn insert_row(&mut self) -> ControllerResult<MutationOutcome> {
        let selection = self.view.selected_row();
        let outcome = ops::insert_row(&self.table, &mut self.form, selection);
        self.finish(outcome)
    }

    /// Edit the selected row.
    pub fn edit_row(&mut self) -> ControllerResult<MutationOutcome> {
        let selection = self.view.selected_row();
        let outcome = ops::edit_row(&self.table, &mut self.form, selection);
        self.finish(outcome)
    }

    /// Move a row chosen through the form.
    pub fn move_row(&mut self) -> ControllerResult<MutationOutcome> {
        let outcome = ops::move_row(&self.table, &mut self.form);
        self.finish(outcome)
    }

    /// Delete the selected row.
    pub fn delete_row(&mut self) -> ControllerResult<MutationOutcome> {
        let selection = self.view.selected_row();
        let outcome = ops::delete_row(&self.table, selection);
        self.finish(outcome)
    }

    /// Append a new column with a value for every row.
    pub fn append_column(&mut self) -> ControllerResult<MutationOutcome> {
        let outcome = ops::append_column(&self.table, &mut self.form);
        self.finish(outcome)
    }

    /// Move a column chosen through the form.
    pub fn move_column(&mut self) -> ControllerResult<MutationOutcome> {
        let outcome = ops::move_column(&self.table, &mut self.form);
        self.finish(outcome)
    }

    /// Delete a column chosen through the form.
    pub fn delete_column(&mut self) -> ControllerResult<MutationOutcome> {
        let outcome = ops::delete_column(&self.table, &mut self.form);
        self.finish(outcome)
    }

    /// Re-key the table from columns chosen through the form.
    pub fn set_index(&mut self) -> ControllerResult<MutationOutcome> {
        let outcome = ops::set_index(&self.table, &mut self.form);
        self.finish(outcome)
    }

    /// Refresh the view from the current table state.
    pub fn refresh(&mut self) {
        self.view.refresh(&self.table.borrow());
    }

    // The refresh runs on every outcome, including errors; a rejected
    // or failed operation must not leave a stale display behind.
    fn finish(
        &mut self,
        outcome: ControllerResult<MutationOutcome>,
    ) -> ControllerResult<MutationOutcome> {
        self.refresh();
        outcome
    }
}
