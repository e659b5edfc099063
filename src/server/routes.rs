//! Router configuration for the query service.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use super::handlers;
use super::AppState;

/// Create the query service router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::read_root))
        .route("/get-date", get(handlers::get_date))
        .route("/health", get(handlers::health))
        // Waste queries
        .route("/total_waste/:comune/:year", get(handlers::total_waste))
        .route(
            "/total_waste_all_years/:comune",
            get(handlers::total_waste_all_years),
        )
        .route(
            "/find_municipalities_by_waste/:year",
            get(handlers::find_municipalities_by_waste),
        )
        .route(
            "/raccolta_differenziata/:comune",
            get(handlers::raccolta_differenziata),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
