//! Dataset row model.

use serde::{Deserialize, Serialize};

/// A municipality's waste figures for one year.
///
/// Numeric fields are `None` when the source cell is blank or not a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteRecord {
    /// Municipality name (`Comune`).
    pub comune: String,
    /// Reference year (`Anno`).
    pub year: i32,
    /// Total waste in kilograms.
    pub total_kg: Option<f64>,
    /// Total waste per inhabitant in kilograms.
    pub per_capita_kg: Option<f64>,
    /// Differentiated (separated) collection in kilograms.
    pub differentiated_kg: Option<f64>,
}
