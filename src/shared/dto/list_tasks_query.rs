use serde::Deserialize;

use crate::{
    task_status::TaskStatus,
    validation::FieldError,
};

pub const LIMIT_MAX: u32 = 500;
pub const LIMIT_DEFAULT: u32 = 100;

#[derive(Debug, Deserialize)]
pub struct ListTasksQuery {
    pub status: Option<TaskStatus>,
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    LIMIT_DEFAULT
}

impl Default for ListTasksQuery {
    fn default() -> Self {
        ListTasksQuery {
            status: None,
            skip: 0,
            limit: LIMIT_DEFAULT,
        }
    }
}

impl ListTasksQuery {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        if self.limit < 1 || self.limit > LIMIT_MAX {
            return Err(vec![FieldError::new(
                "limit",
                format!("Limit must be between 1 and {LIMIT_MAX}"),
            )]);
        }
        Ok(())
    }
}
