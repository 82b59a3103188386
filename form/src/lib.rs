//! The form-collaborator boundary.
//!
//! Mutation operations gather their input through a [`FormHost`]: a
//! single blocking request/response against an external UI. The host
//! either returns one string per field, in field order, or reports
//! cancellation; the two are semantically distinct (a submission of
//! all-empty strings still applies a mutation, a cancellation applies
//! nothing).
//!
//! [`ScriptedForm`] is the non-interactive stand-in used by tests;
//! [`ConsoleForm`] is a blocking stdin/stdout host for the driver
//! binary.

mod console;
mod request;
mod scripted;

pub use console::ConsoleForm;
pub use request::{FormField, FormRequest, FormResponse};
pub use scripted::ScriptedForm;

/// The external input boundary consumed by mutation operations.
pub trait FormHost {
    /// Present a form and block until the user submits or cancels.
    fn request(&mut self, request: FormRequest) -> FormResponse;

    /// Report a validation failure back to the user.
    fn notify(&mut self, message: &str);
}
