use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::{
    task_status::TaskStatus,
    validation::{self, FieldError},
};

/// Partial update. Every field is optional; a field absent from the body is
/// left untouched by persistence. Only `description` distinguishes
/// present-and-null (clear it) from absent: `None` means absent,
/// `Some(None)` means an explicit `null`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub status: Option<TaskStatus>,
    pub due_date: Option<DateTime<Utc>>,
}

fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl UpdateTaskRequest {
    /// Present fields obey the same per-field constraints as creation.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if let Some(title) = &self.title {
            validation::check_title(title, &mut errors);
        }
        if let Some(Some(description)) = &self.description {
            validation::check_description(description, &mut errors);
        }
        if let Some(due_date) = self.due_date {
            validation::check_due_date(due_date, &mut errors);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
