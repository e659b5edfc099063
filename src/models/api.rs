//! JSON payloads exchanged between the query service and its clients.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Response of `GET /get-date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateResponse {
    #[serde(default)]
    pub date: Option<String>,
}

/// Result of a single total-waste lookup: a number (or `null` when the cell
/// is not numeric), or a not-found message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WasteLookup {
    Found(Option<f64>),
    Missing(String),
}

/// Response of `GET /total_waste/{comune}/{year}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalWasteResponse {
    pub comune: String,
    pub year: i32,
    #[serde(default)]
    pub total_waste: Option<WasteLookup>,
}

/// Response of `GET /total_waste_all_years/{comune}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalWasteAllYearsResponse {
    pub comune: String,
    #[serde(default, deserialize_with = "year_keys::deserialize")]
    pub total_waste_data: BTreeMap<i32, Option<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Either a query result or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryOutcome<T> {
    Success(T),
    Failure { error: String },
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for QueryOutcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => QueryOutcome::Success(value),
            Err(e) => QueryOutcome::Failure {
                error: e.to_string(),
            },
        }
    }
}

/// Year-keyed maps arrive with string keys; parse them explicitly so they
/// also decode inside untagged enums, where serde buffers keys as strings.
pub(crate) mod year_keys {
    use std::collections::BTreeMap;

    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, V>(deserializer: D) -> Result<BTreeMap<i32, V>, D::Error>
    where
        D: Deserializer<'de>,
        V: Deserialize<'de>,
    {
        BTreeMap::<String, V>::deserialize(deserializer)?
            .into_iter()
            .map(|(key, value)| {
                key.trim()
                    .parse::<i32>()
                    .map(|year| (year, value))
                    .map_err(|_| D::Error::custom(format!("invalid year key: {}", key)))
            })
            .collect()
    }
}
