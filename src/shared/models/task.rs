use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::task_status::TaskStatus;

/// A stored task row. `description` serializes as an explicit `null` when
/// absent, matching the wire format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub due_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
