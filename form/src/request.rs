//! Form request/response types.

/// One field in a form: a prompt, an optional default, and an optional
/// enumerated option set the answer must come from.
#[derive(Debug, Clone)]
pub struct FormField {
    pub prompt: String,
    pub default: Option<String>,
    pub choices: Option<Vec<String>>,
}

impl FormField {
    /// A free-text field.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            default: None,
            choices: None,
        }
    }

    /// Pre-fill the field with a default value.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Constrain the field to an enumerated option set.
    pub fn with_choices(mut self, choices: Vec<String>) -> Self {
        self.choices = Some(choices);
        self
    }
}

/// An ordered sequence of field prompts presented as one form.
#[derive(Debug, Clone)]
pub struct FormRequest {
    pub title: String,
    pub fields: Vec<FormField>,
}

impl FormRequest {
    pub fn new(title: impl Into<String>, fields: Vec<FormField>) -> Self {
        Self {
            title: title.into(),
            fields,
        }
    }
}

/// The host's answer to a [`FormRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormResponse {
    /// One string per field, in field order.
    Submitted(Vec<String>),
    /// The user dismissed the form; apply nothing.
    Cancelled,
}

impl FormResponse {
    /// Build a submission from string slices.
    pub fn submitted(values: &[&str]) -> Self {
        Self::Submitted(values.iter().map(|v| v.to_string()).collect())
    }
}
