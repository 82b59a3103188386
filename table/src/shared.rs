//! Stable shared handle to an [`OrderedTable`].

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::OrderedTable;

/// A cheap-to-clone handle that pins the table to one storage slot.
///
/// Every holder of a clone sees the same storage, so mutations made
/// through one handle are observed by all of them without re-fetching.
/// The model is strictly single-threaded turn-taking: exactly one
/// mutator runs at a time and readers only run between mutations, so
/// borrows never overlap.
#[derive(Debug, Clone)]
pub struct SharedTable(Rc<RefCell<OrderedTable>>);

impl SharedTable {
    /// Wrap a table in a stable handle.
    pub fn new(table: OrderedTable) -> Self {
        Self(Rc::new(RefCell::new(table)))
    }

    /// Borrow the table for reading.
    pub fn borrow(&self) -> Ref<'_, OrderedTable> {
        self.0.borrow()
    }

    /// Borrow the table for a mutation.
    pub fn borrow_mut(&self) -> RefMut<'_, OrderedTable> {
        self.0.borrow_mut()
    }

    /// True if both handles point at the same storage.
    pub fn ptr_eq(a: &SharedTable, b: &SharedTable) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}
