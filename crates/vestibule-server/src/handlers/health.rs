use rocket::get;
use rocket::serde::json::{Json, Value, json};

/// Liveness check; no guard and no dependencies
#[get("/health")]
pub fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
