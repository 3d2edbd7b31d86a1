use serde::Deserialize;

use crate::task_status::TaskStatus;

/// Status-only update. The closed `TaskStatus` enum does the validation.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskStatusRequest {
    pub status: TaskStatus,
}
