use serde::{Deserialize, Serialize};

/// Lifecycle stage of a task. Any other string is rejected at the serde
/// boundary and never reaches the store.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Completed,
}
