//! Mutation controller for the ordered table.
//!
//! Translates user intents (append/insert/edit/move/delete row,
//! append/move/delete column, re-key) into table primitives. Every
//! operation follows one contract: gather input through the form
//! host, mutate nothing on cancellation, validate and apply
//! otherwise, and always finish by refreshing the view.
//!
//! # Module Structure
//!
//! - `controller` - the [`MutationController`] coordinating operations
//! - `ops/` - individual operation implementations (row, column, index)
//! - `result` - the [`MutationOutcome`] of one operation
//! - `error` - error types for contract violations

mod controller;
mod error;
mod ops;
mod result;

pub use controller::MutationController;
pub use error::{ControllerError, ControllerResult};
pub use result::MutationOutcome;
