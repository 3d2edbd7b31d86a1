use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::{app_state::SharedState, task_controller::TaskController};

pub const ROUTER_PATH: &str = "/tasks";

pub fn get_router(app_state: SharedState) -> Router {
    Router::new()
        .route(
            ROUTER_PATH,
            post(TaskController::create).get(TaskController::get_all),
        )
        .route(
            format!("{}/:id", ROUTER_PATH).as_str(),
            get(TaskController::get)
                .put(TaskController::update)
                .delete(TaskController::delete),
        )
        .route(
            format!("{}/:id/status", ROUTER_PATH).as_str(),
            patch(TaskController::update_status),
        )
        .with_state(app_state)
}
