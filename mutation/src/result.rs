//! Outcome of one controller operation.

/// What a controller operation did.
///
/// Only `Applied` mutated the table; the other three leave it exactly
/// as it was (the view is refreshed either way).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The mutation was applied.
    Applied,
    /// The user dismissed the form.
    Cancelled,
    /// The operation needed a selected row and none was selected.
    NoSelection,
    /// User input violated a table contract; the message was reported
    /// through the form host.
    Rejected(String),
}

impl MutationOutcome {
    /// True if the table was mutated.
    pub fn is_applied(&self) -> bool {
        matches!(self, MutationOutcome::Applied)
    }

    /// True if the operation was rejected on user input.
    pub fn is_rejected(&self) -> bool {
        matches!(self, MutationOutcome::Rejected(_))
    }
}
