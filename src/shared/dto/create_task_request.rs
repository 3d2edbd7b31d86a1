use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{
    task_status::TaskStatus,
    validation::{self, FieldError},
};

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: Option<String>,
    #[serde(default = "default_status")]
    pub status: TaskStatus,
    pub due_date: DateTime<Utc>,
}

fn default_status() -> TaskStatus {
    TaskStatus::Todo
}

impl CreateTaskRequest {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        validation::check_title(&self.title, &mut errors);
        if let Some(description) = &self.description {
            validation::check_description(description, &mut errors);
        }
        validation::check_due_date(self.due_date, &mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
