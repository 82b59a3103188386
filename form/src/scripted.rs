//! Scripted form host for tests and headless use.

use std::collections::VecDeque;

use crate::{FormHost, FormRequest, FormResponse};

/// A form host that replays canned responses and records everything it
/// was asked, standing in for the interactive front-end.
#[derive(Debug, Default)]
pub struct ScriptedForm {
    responses: VecDeque<FormResponse>,
    requests: Vec<FormRequest>,
    notifications: Vec<String>,
}

impl ScriptedForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a submission with the given field values.
    pub fn submit(mut self, values: &[&str]) -> Self {
        self.responses.push_back(FormResponse::submitted(values));
        self
    }

    /// Queue a cancellation.
    pub fn cancel(mut self) -> Self {
        self.responses.push_back(FormResponse::Cancelled);
        self
    }

    /// The requests received so far, in order.
    pub fn requests(&self) -> &[FormRequest] {
        &self.requests
    }

    /// The validation messages received so far, in order.
    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }
}

impl FormHost for ScriptedForm {
    /// Replays the next queued response; an exhausted script cancels.
    fn request(&mut self, request: FormRequest) -> FormResponse {
        self.requests.push(request);
        self.responses.pop_front().unwrap_or(FormResponse::Cancelled)
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }
}
