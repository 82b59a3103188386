//! Common error types for table operations.

use std::fmt;

use thiserror::Error;

/// The axis an error refers to, so one error enum serves rows and
/// columns alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Errors raised by table primitives.
///
/// All of these are local-validation failures surfaced synchronously;
/// a primitive that returns an error has not mutated the table.
#[derive(Debug, Error)]
pub enum TableError {
    /// Position outside the current bounds of the axis.
    #[error("{axis} position {position} out of range (len {len})")]
    OutOfRange {
        axis: Axis,
        position: usize,
        len: usize,
    },

    /// Lookup by a label that is not present.
    #[error("unknown {axis} label: {label}")]
    UnknownLabel { axis: Axis, label: String },

    /// Insert or rename would create a label collision.
    #[error("duplicate {axis} label: {label}")]
    DuplicateLabel { axis: Axis, label: String },

    /// Supplied value count does not match the current shape.
    #[error("expected {expected} values, got {actual}")]
    ColumnMismatch { expected: usize, actual: usize },
}

impl TableError {
    pub fn out_of_range(axis: Axis, position: usize, len: usize) -> Self {
        Self::OutOfRange {
            axis,
            position,
            len,
        }
    }

    pub fn unknown_label(axis: Axis, label: impl Into<String>) -> Self {
        Self::UnknownLabel {
            axis,
            label: label.into(),
        }
    }

    pub fn duplicate_label(axis: Axis, label: impl Into<String>) -> Self {
        Self::DuplicateLabel {
            axis,
            label: label.into(),
        }
    }

    pub fn column_mismatch(expected: usize, actual: usize) -> Self {
        Self::ColumnMismatch { expected, actual }
    }
}

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;
