use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    app_state::SharedState, create_task_request::CreateTaskRequest,
    list_tasks_query::ListTasksQuery, task::Task, task_list_response::TaskListResponse,
    update_task_request::UpdateTaskRequest,
    update_task_status_request::UpdateTaskStatusRequest, web_api::error::ApiError,
};

pub struct TaskController {}

impl TaskController {
    // POST /tasks
    pub async fn create(
        State(state): State<SharedState>,
        Json(body): Json<CreateTaskRequest>,
    ) -> Result<(StatusCode, Json<Task>), ApiError> {
        body.validate()?;
        let task = state.data_context.insert_task(body).await?;
        tracing::info!(id = task.id, "task created");
        Ok((StatusCode::CREATED, Json(task)))
    }

    // GET /tasks
    pub async fn get_all(
        State(state): State<SharedState>,
        Query(query): Query<ListTasksQuery>,
    ) -> Result<Json<TaskListResponse>, ApiError> {
        query.validate()?;
        let (tasks, total) = state
            .data_context
            .list_tasks(query.status, query.skip, query.limit)
            .await?;
        Ok(Json(TaskListResponse { tasks, total }))
    }

    // GET /tasks/:id
    pub async fn get(
        State(state): State<SharedState>,
        Path(id): Path<i64>,
    ) -> Result<Json<Task>, ApiError> {
        let task = state
            .data_context
            .get_task(id)
            .await?
            .ok_or(ApiError::NotFound(id))?;
        Ok(Json(task))
    }

    // PATCH /tasks/:id/status
    pub async fn update_status(
        State(state): State<SharedState>,
        Path(id): Path<i64>,
        Json(body): Json<UpdateTaskStatusRequest>,
    ) -> Result<Json<Task>, ApiError> {
        let task = state
            .data_context
            .get_task(id)
            .await?
            .ok_or(ApiError::NotFound(id))?;
        let task = state
            .data_context
            .update_task_status(&task, body.status)
            .await?;
        tracing::info!(id = task.id, status = ?task.status, "task status updated");
        Ok(Json(task))
    }

    // PUT /tasks/:id
    pub async fn update(
        State(state): State<SharedState>,
        Path(id): Path<i64>,
        Json(body): Json<UpdateTaskRequest>,
    ) -> Result<Json<Task>, ApiError> {
        body.validate()?;
        let task = state
            .data_context
            .get_task(id)
            .await?
            .ok_or(ApiError::NotFound(id))?;
        let task = state.data_context.update_task(&task, &body).await?;
        tracing::info!(id = task.id, "task updated");
        Ok(Json(task))
    }

    // DELETE /tasks/:id
    pub async fn delete(
        State(state): State<SharedState>,
        Path(id): Path<i64>,
    ) -> Result<StatusCode, ApiError> {
        if state.data_context.get_task(id).await?.is_none() {
            return Err(ApiError::NotFound(id));
        }
        state.data_context.delete_task(id).await?;
        tracing::info!(id, "task deleted");
        Ok(StatusCode::NO_CONTENT)
    }
}
