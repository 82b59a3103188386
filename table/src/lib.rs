//! In-place ordered-table storage.
//!
//! The table is a mutable cell, not a value: every primitive edits the
//! existing storage and none of them ever rebuilds the table, so
//! external holders of a [`SharedTable`] handle observe each edit
//! without re-fetching.
//!
//! # Module Structure
//!
//! - `table` - the [`OrderedTable`] storage and its CRUD primitives
//! - `order` - fractional ordering keys for collision-safe moves
//! - `scratch` - operation-scoped placeholder labels
//! - `shared` - the stable [`SharedTable`] handle

mod order;
mod scratch;
mod shared;
mod table;

pub use order::OrderKey;
pub use scratch::ScratchLabels;
pub use shared::SharedTable;
pub use table::OrderedTable;
