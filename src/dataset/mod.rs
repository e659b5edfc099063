//! Municipal waste dataset access.
//!
//! The dataset is a semicolon-delimited CSV file with one row per
//! (municipality, year). It is read from disk on every request and never
//! written back.

mod loader;
mod numeric;
mod queries;

pub use loader::{
    COLUMN_ANNO, COLUMN_COMUNE, COLUMN_DIFFERENTIATED, COLUMN_PER_CAPITA, COLUMN_TOTAL,
};
pub use numeric::{parse_locale_number, parse_thousands_number};
pub use queries::QueryError;

use thiserror::Error;

use crate::models::WasteRecord;

/// Errors raised while reading the dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    /// Raised by the CSV reader, mostly for I/O failures mid-read since rows
    /// of any length are accepted.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Missing column: {0}")]
    MissingColumn(&'static str),
}

/// In-memory copy of the dataset, in source row order.
#[derive(Debug, Clone, Default)]
pub struct WasteDataset {
    records: Vec<WasteRecord>,
}

impl WasteDataset {
    /// Build a dataset from already parsed records.
    pub fn from_records(records: Vec<WasteRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[WasteRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
