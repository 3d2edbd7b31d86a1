use serde::Serialize;

use crate::task::Task;

/// Page of tasks plus the total count of rows matching the filter before
/// pagination was applied.
#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    pub tasks: Vec<Task>,
    pub total: i64,
}
