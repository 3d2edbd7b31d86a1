use std::str::FromStr;

use chrono::Utc;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
    SqlitePool,
};

use crate::{
    create_task_request::CreateTaskRequest, task::Task, task_status::TaskStatus,
    update_task_request::UpdateTaskRequest,
};

/// Relational operations on the tasks table. No business validation happens
/// here; requests arrive already constraint-checked.
#[derive(Clone)]
pub struct DataContext {
    pool: SqlitePool,
}

impl DataContext {
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let opts = SqliteConnectOptions::from_str(database_url)?
            .journal_mode(SqliteJournalMode::Wal)
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(opts).await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(DataContext { pool })
    }

    /// Transient store for tests. Single connection, since every pooled
    /// connection to `sqlite::memory:` would otherwise get its own database.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(DataContext { pool })
    }

    pub async fn insert_task(&self, request: CreateTaskRequest) -> Result<Task, sqlx::Error> {
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO tasks (title, description, status, due_date, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&request.title)
        .bind(&request.description)
        .bind(request.status)
        .bind(request.due_date)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        self.fetch_task(result.last_insert_rowid()).await
    }

    pub async fn get_task(&self, id: i64) -> Result<Option<Task>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM tasks WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Page of tasks newest first plus the pre-pagination total. Rows sharing
    /// a `created_at` order by id descending so ties stay newest first.
    pub async fn list_tasks(
        &self,
        status: Option<TaskStatus>,
        skip: u32,
        limit: u32,
    ) -> Result<(Vec<Task>, i64), sqlx::Error> {
        match status {
            Some(status) => {
                let total: i64 =
                    sqlx::query_scalar("SELECT COUNT(*) FROM tasks WHERE status = ?")
                        .bind(status)
                        .fetch_one(&self.pool)
                        .await?;
                let tasks = sqlx::query_as(
                    "SELECT * FROM tasks WHERE status = ?
                     ORDER BY created_at DESC, id DESC LIMIT ? OFFSET ?",
                )
                .bind(status)
                .bind(i64::from(limit))
                .bind(i64::from(skip))
                .fetch_all(&self.pool)
                .await?;
                Ok((tasks, total))
            }
            None => {
                let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tasks")
                    .fetch_one(&self.pool)
                    .await?;
                let tasks = sqlx::query_as(
                    "SELECT * FROM tasks ORDER BY created_at DESC, id DESC LIMIT ? OFFSET ?",
                )
                .bind(i64::from(limit))
                .bind(i64::from(skip))
                .fetch_all(&self.pool)
                .await?;
                Ok((tasks, total))
            }
        }
    }

    pub async fn update_task_status(
        &self,
        task: &Task,
        status: TaskStatus,
    ) -> Result<Task, sqlx::Error> {
        sqlx::query("UPDATE tasks SET status = ?, updated_at = ? WHERE id = ?")
            .bind(status)
            .bind(Utc::now())
            .bind(task.id)
            .execute(&self.pool)
            .await?;

        self.fetch_task(task.id).await
    }

    /// Overwrites exactly the fields the request provides and refreshes
    /// `updated_at`. An explicit-null description writes NULL.
    pub async fn update_task(
        &self,
        task: &Task,
        changes: &UpdateTaskRequest,
    ) -> Result<Task, sqlx::Error> {
        let title = changes.title.as_ref().unwrap_or(&task.title);
        let description = match &changes.description {
            Some(description) => description.as_ref(),
            None => task.description.as_ref(),
        };
        let status = changes.status.unwrap_or(task.status);
        let due_date = changes.due_date.unwrap_or(task.due_date);

        sqlx::query(
            "UPDATE tasks SET title = ?, description = ?, status = ?, due_date = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(title)
        .bind(description)
        .bind(status)
        .bind(due_date)
        .bind(Utc::now())
        .bind(task.id)
        .execute(&self.pool)
        .await?;

        self.fetch_task(task.id).await
    }

    pub async fn delete_task(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn fetch_task(&self, id: i64) -> Result<Task, sqlx::Error> {
        sqlx::query_as("SELECT * FROM tasks WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }
}
