//! Controller error types.

use tabula_core::TableError;
use thiserror::Error;

/// Result type for controller operations.
pub type ControllerResult<T> = Result<T, ControllerError>;

/// Programmer-error contract violations.
///
/// Collisions a user can cause through form input never surface here;
/// those are reported through the form host and returned as
/// [`crate::MutationOutcome::Rejected`].
#[derive(Debug, Error)]
pub enum ControllerError {
    /// A table primitive rejected a position or shape the controller
    /// computed itself (e.g. a stale selection snapshot).
    #[error(transparent)]
    Table(#[from] TableError),

    /// The form host returned the wrong number of values.
    #[error("form returned {actual} values, expected {expected}")]
    FieldMismatch { expected: usize, actual: usize },
}
