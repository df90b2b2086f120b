use axum::{response::IntoResponse, Json};
use serde_json::json;

/// The gateway has no dependency worth probing, so being able to answer is healthy.
pub(super) async fn health() -> impl IntoResponse {
    Json(json!({ "status": "healthy" }))
}
