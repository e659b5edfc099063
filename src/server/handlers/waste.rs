//! Waste query handlers.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};

use super::super::AppState;
use super::helpers::{load_dataset, parse_year};
use crate::models::{QueryOutcome, TotalWasteAllYearsResponse, TotalWasteResponse, WasteLookup};

/// Total waste for a municipality in a given year.
pub async fn total_waste(
    State(state): State<AppState>,
    Path((comune, year)): Path<(String, String)>,
) -> Response {
    let year = match parse_year(&year) {
        Ok(y) => y,
        Err(response) => return response,
    };
    let dataset = match load_dataset(&state).await {
        Ok(d) => d,
        Err(response) => return response,
    };

    let total_waste = match dataset.total_waste(&comune, year) {
        Ok(value) => WasteLookup::Found(value),
        Err(e) => WasteLookup::Missing(e.to_string()),
    };
    tracing::debug!("total_waste({}, {}) -> {:?}", comune, year, total_waste);

    Json(TotalWasteResponse {
        comune,
        year,
        total_waste: Some(total_waste),
    })
    .into_response()
}

/// Total waste for every recorded year of a municipality.
pub async fn total_waste_all_years(
    State(state): State<AppState>,
    Path(comune): Path<String>,
) -> Response {
    let dataset = match load_dataset(&state).await {
        Ok(d) => d,
        Err(response) => return response,
    };

    let response = match dataset.total_waste_all_years(&comune) {
        Ok(total_waste_data) => TotalWasteAllYearsResponse {
            comune,
            total_waste_data,
            message: None,
        },
        Err(e) => TotalWasteAllYearsResponse {
            comune,
            total_waste_data: Default::default(),
            message: Some(e.to_string()),
        },
    };

    Json(response).into_response()
}

/// Municipalities with the highest and lowest per-capita waste in a year.
pub async fn find_municipalities_by_waste(
    State(state): State<AppState>,
    Path(year): Path<String>,
) -> Response {
    let year = match parse_year(&year) {
        Ok(y) => y,
        Err(response) => return response,
    };
    let dataset = match load_dataset(&state).await {
        Ok(d) => d,
        Err(response) => return response,
    };

    Json(QueryOutcome::from(dataset.find_extremes_by_year(year))).into_response()
}

/// Change in differentiated collection for a municipality.
pub async fn raccolta_differenziata(
    State(state): State<AppState>,
    Path(comune): Path<String>,
) -> Response {
    let dataset = match load_dataset(&state).await {
        Ok(d) => d,
        Err(response) => return response,
    };

    Json(QueryOutcome::from(dataset.collection_change(&comune))).into_response()
}
