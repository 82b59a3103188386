//! Core types for tabula.
//!
//! Scalar cell values, composite row keys, and the error types shared
//! by every crate in the workspace.

mod error;
mod key;
mod value;

pub use error::{Axis, TableError, TableResult};
pub use key::{index_component_name, RowKey};
pub use value::Value;
