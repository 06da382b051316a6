use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::types::workout::WorkoutKind;

pub fn router() -> Router<crate::state::AppState> {
    Router::new().route("/health", get(health))
}

async fn health() -> Json<Value> {
    let activities: Vec<&str> = WorkoutKind::ALL.iter().map(WorkoutKind::code).collect();
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "activities": activities
    }))
}
