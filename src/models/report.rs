//! Aggregated query results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Highest and lowest per-capita waste among municipalities for a year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteExtremes {
    pub year: i32,
    pub max_municipality: String,
    pub max_value: f64,
    pub min_municipality: String,
    pub min_value: f64,
}

/// Differentiated collection series for a municipality and its overall change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionChange {
    /// Kilograms collected, keyed by year.
    #[serde(rename = "data", deserialize_with = "super::api::year_keys::deserialize")]
    pub series: BTreeMap<i32, f64>,
    /// Change from the first to the last row, in percent.
    pub percentage_change: f64,
}
