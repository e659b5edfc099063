//! Router configuration for the web frontend.

use axum::{routing::get, Router};

use super::handlers;
use super::WebState;

/// Create the frontend router with all pages.
pub fn create_router(state: WebState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        // Query forms: GET renders, POST submits
        .route(
            "/internal",
            get(handlers::total_waste_page).post(handlers::total_waste_submit),
        )
        .route(
            "/total_waste_all_years",
            get(handlers::all_years_page).post(handlers::all_years_submit),
        )
        .route(
            "/find_municipalities_by_waste",
            get(handlers::extremes_page).post(handlers::extremes_submit),
        )
        .route(
            "/raccolta_differenziata",
            get(handlers::collection_page).post(handlers::collection_submit),
        )
        // Static assets
        .route("/static/style.css", get(handlers::serve_css))
        .with_state(state)
}
