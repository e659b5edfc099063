//! Lookup and aggregation queries over the waste dataset.
//!
//! Every query is a single pass over the records in source order. Where a
//! query picks "first" or "last" it means row order, not year order.

use std::collections::BTreeMap;

use thiserror::Error;

use super::WasteDataset;
use crate::models::{CollectionChange, WasteExtremes, WasteRecord};

/// Reasons a query has no answer. The messages are user facing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("No data found for the specified Comune and Year.")]
    NoRecord,
    #[error("No data found for the specified Comune.")]
    UnknownComune,
    #[error("No data available for the specified year")]
    NoDataForYear,
    #[error("No data available for the specified comune")]
    NoDataForComune,
    #[error("Insufficient data for percentage change calculation")]
    InsufficientData,
    #[error("Percentage change undefined: first recorded value is zero")]
    ZeroBaseline,
}

impl WasteDataset {
    /// Total waste for a municipality in a year.
    ///
    /// Matches both fields exactly and returns the first matching row's value.
    /// `Ok(None)` means the row exists but its total is not a number.
    pub fn total_waste(&self, comune: &str, year: i32) -> Result<Option<f64>, QueryError> {
        self.records
            .iter()
            .find(|r| r.comune == comune && r.year == year)
            .map(|r| r.total_kg)
            .ok_or(QueryError::NoRecord)
    }

    /// Total waste for every year recorded for a municipality.
    pub fn total_waste_all_years(
        &self,
        comune: &str,
    ) -> Result<BTreeMap<i32, Option<f64>>, QueryError> {
        let by_year: BTreeMap<i32, Option<f64>> = self
            .records
            .iter()
            .filter(|r| r.comune == comune)
            .map(|r| (r.year, r.total_kg))
            .collect();

        if by_year.is_empty() {
            return Err(QueryError::UnknownComune);
        }
        Ok(by_year)
    }

    /// Municipalities with the highest and lowest per-capita waste in a year.
    ///
    /// Ties go to the row that appears first. Rows without a per-capita
    /// figure are ignored.
    pub fn find_extremes_by_year(&self, year: i32) -> Result<WasteExtremes, QueryError> {
        let mut max: Option<(&WasteRecord, f64)> = None;
        let mut min: Option<(&WasteRecord, f64)> = None;

        for record in self.records.iter().filter(|r| r.year == year) {
            let Some(value) = record.per_capita_kg else {
                continue;
            };
            if max.map_or(true, |(_, best)| value > best) {
                max = Some((record, value));
            }
            if min.map_or(true, |(_, best)| value < best) {
                min = Some((record, value));
            }
        }

        match (max, min) {
            (Some((max_record, max_value)), Some((min_record, min_value))) => Ok(WasteExtremes {
                year,
                max_municipality: max_record.comune.clone(),
                max_value,
                min_municipality: min_record.comune.clone(),
                min_value,
            }),
            _ => Err(QueryError::NoDataForYear),
        }
    }

    /// Change in differentiated collection between a municipality's first and
    /// last usable rows.
    pub fn collection_change(&self, comune: &str) -> Result<CollectionChange, QueryError> {
        let comune = comune.trim();
        let points: Vec<(i32, f64)> = self
            .records
            .iter()
            .filter(|r| r.comune.trim() == comune)
            .filter_map(|r| r.differentiated_kg.map(|kg| (r.year, kg)))
            .collect();

        let (first, last) = match points.as_slice() {
            [] => return Err(QueryError::NoDataForComune),
            [_] => return Err(QueryError::InsufficientData),
            [first, .., last] => (first.1, last.1),
        };

        if first == 0.0 {
            return Err(QueryError::ZeroBaseline);
        }

        Ok(CollectionChange {
            series: points.into_iter().collect(),
            percentage_change: (last - first) / first * 100.0,
        })
    }
}
