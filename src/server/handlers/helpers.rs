//! Shared helpers for query handlers.
//!
//! Failures are reported as `{"error": ...}` bodies with status 200 so that
//! callers always receive JSON.

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use super::super::AppState;
use crate::dataset::WasteDataset;

/// JSON error body.
pub fn error_response(message: impl Into<String>) -> Response {
    Json(serde_json::json!({ "error": message.into() })).into_response()
}

/// Read the dataset for this request.
pub async fn load_dataset(state: &AppState) -> Result<WasteDataset, Response> {
    WasteDataset::load(&state.dataset_path).await.map_err(|e| {
        tracing::error!("{}: {}", state.dataset_path.display(), e);
        error_response(format!("Dataset unavailable: {}", e))
    })
}

/// Parse a year path segment.
pub fn parse_year(raw: &str) -> Result<i32, Response> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| error_response(format!("Invalid year: {}", raw)))
}
