//! Service-level endpoint handlers.

use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::Local;

use crate::models::DateResponse;

/// Root greeting.
pub async fn read_root() -> impl IntoResponse {
    Json(serde_json::json!({ "Hello": "World" }))
}

/// Current local date and time in ISO-8601 format.
pub async fn get_date() -> impl IntoResponse {
    let date = Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string();
    Json(DateResponse { date: Some(date) })
}

/// Health check endpoint for container orchestration.
pub async fn health() -> impl IntoResponse {
    StatusCode::OK
}
