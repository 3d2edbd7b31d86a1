// Requests
pub mod create_task_request;
pub mod list_tasks_query;
pub mod update_task_request;
pub mod update_task_status_request;

// Responses
pub mod task_list_response;
