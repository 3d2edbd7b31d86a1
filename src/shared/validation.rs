use chrono::{DateTime, Utc};
use serde::Serialize;

pub const TITLE_MAX_LEN: usize = 255;
pub const DESCRIPTION_MAX_LEN: usize = 2000;

/// One failed constraint. A request that violates several constraints
/// reports all of them, not just the first.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        FieldError {
            field,
            message: message.into(),
        }
    }
}

// Lengths are counted in chars on the raw string; no trimming is applied.
pub fn check_title(title: &str, errors: &mut Vec<FieldError>) {
    let len = title.chars().count();
    if len == 0 {
        errors.push(FieldError::new("title", "Title must not be empty"));
    } else if len > TITLE_MAX_LEN {
        errors.push(FieldError::new(
            "title",
            format!("Title must be at most {TITLE_MAX_LEN} characters"),
        ));
    }
}

pub fn check_description(description: &str, errors: &mut Vec<FieldError>) {
    if description.chars().count() > DESCRIPTION_MAX_LEN {
        errors.push(FieldError::new(
            "description",
            format!("Description must be at most {DESCRIPTION_MAX_LEN} characters"),
        ));
    }
}

/// Checked against the clock at the validation instant only; a stored due
/// date is never re-checked at read time.
pub fn check_due_date(due_date: DateTime<Utc>, errors: &mut Vec<FieldError>) {
    if due_date < Utc::now() {
        errors.push(FieldError::new("due_date", "Due date cannot be in the past"));
    }
}
