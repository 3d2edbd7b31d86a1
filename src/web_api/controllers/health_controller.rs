use axum::Json;
use serde_json::{json, Value};

pub struct HealthController {}

impl HealthController {
    pub async fn get() -> Json<Value> {
        Json(json!({ "status": "healthy" }))
    }
}
