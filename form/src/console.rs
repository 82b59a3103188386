//! Blocking stdin/stdout form host for the interactive driver.

use std::io::{self, BufRead, Write};

use crate::{FormHost, FormRequest, FormResponse};

/// Prompts on stdout and reads answers from stdin, one field at a
/// time. Empty input accepts the field's default (or the empty
/// string); a lone `.` cancels the whole form. Enumerated fields are
/// printed as a numbered list and accept either the number or the
/// exact option text.
#[derive(Debug, Default)]
pub struct ConsoleForm;

impl ConsoleForm {
    pub fn new() -> Self {
        Self
    }

    fn read_line(&self) -> Option<String> {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            // EOF counts as cancellation.
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\n', '\r']).to_string()),
            Err(_) => None,
        }
    }
}

impl FormHost for ConsoleForm {
    fn request(&mut self, request: FormRequest) -> FormResponse {
        println!("-- {} (enter . to cancel) --", request.title);
        let mut values = Vec::with_capacity(request.fields.len());

        for field in &request.fields {
            if let Some(choices) = &field.choices {
                for (i, choice) in choices.iter().enumerate() {
                    println!("  {}) {}", i, choice);
                }
            }
            match &field.default {
                Some(default) if !default.is_empty() => {
                    print!("{} [{}]: ", field.prompt, default)
                }
                _ => print!("{}: ", field.prompt),
            }
            let _ = io::stdout().flush();

            let line = match self.read_line() {
                Some(line) => line,
                None => return FormResponse::Cancelled,
            };
            if line == "." {
                return FormResponse::Cancelled;
            }

            let answer = if line.is_empty() {
                field.default.clone().unwrap_or_default()
            } else if let Some(choices) = &field.choices {
                // Accept the option number or the exact option text.
                match line.parse::<usize>() {
                    Ok(i) if i < choices.len() => choices[i].clone(),
                    _ => line,
                }
            } else {
                line
            };
            values.push(answer);
        }

        FormResponse::Submitted(values)
    }

    fn notify(&mut self, message: &str) {
        eprintln!("rejected: {}", message);
    }
}
