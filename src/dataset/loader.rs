//! CSV loading for the waste dataset.

use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};

use super::{parse_locale_number, parse_thousands_number, DatasetError, WasteDataset};
use crate::models::WasteRecord;

pub const COLUMN_COMUNE: &str = "Comune";
pub const COLUMN_ANNO: &str = "Anno";
pub const COLUMN_TOTAL: &str = "Rifiuto totale (in Kg)";
pub const COLUMN_PER_CAPITA: &str = "Rifiuto totale pro capite (in Kg)";
pub const COLUMN_DIFFERENTIATED: &str = "Raccolta differenziata (in Kg)";

/// Positions of the required columns in the header row.
struct ColumnIndex {
    comune: usize,
    anno: usize,
    total: usize,
    per_capita: usize,
    differentiated: usize,
}

impl ColumnIndex {
    fn resolve(headers: &ByteRecord) -> Result<Self, DatasetError> {
        let names: Vec<String> = headers
            .iter()
            .map(|h| {
                String::from_utf8_lossy(h)
                    .trim_start_matches('\u{feff}')
                    .trim()
                    .to_string()
            })
            .collect();

        let find = |column: &'static str| {
            names
                .iter()
                .position(|n| n == column)
                .ok_or(DatasetError::MissingColumn(column))
        };

        Ok(Self {
            comune: find(COLUMN_COMUNE)?,
            anno: find(COLUMN_ANNO)?,
            total: find(COLUMN_TOTAL)?,
            per_capita: find(COLUMN_PER_CAPITA)?,
            differentiated: find(COLUMN_DIFFERENTIATED)?,
        })
    }
}

/// Read a cell as text; missing cells read as empty and invalid UTF-8 is
/// replaced rather than rejected.
fn raw_cell(row: &ByteRecord, index: usize) -> String {
    row.get(index)
        .map(|b| String::from_utf8_lossy(b).into_owned())
        .unwrap_or_default()
}

fn cell(row: &ByteRecord, index: usize) -> String {
    raw_cell(row, index).trim().to_string()
}

impl WasteDataset {
    /// Load the dataset from a file on disk.
    pub async fn load(path: &Path) -> Result<Self, DatasetError> {
        let bytes = tokio::fs::read(path).await?;
        let dataset = Self::from_reader(bytes.as_slice())?;
        tracing::debug!(
            "Loaded {} records from {}",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Parse the dataset from any CSV source.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut csv = ReaderBuilder::new()
            .delimiter(b';')
            .flexible(true)
            .from_reader(reader);

        let columns = ColumnIndex::resolve(csv.byte_headers()?)?;
        let mut records = Vec::new();

        for row in csv.byte_records() {
            let row = row?;
            // Names are kept verbatim; lookups match them exactly.
            let comune = raw_cell(&row, columns.comune);
            let anno = cell(&row, columns.anno);

            let year = match anno.parse::<i32>() {
                Ok(y) => y,
                Err(_) => {
                    tracing::warn!(
                        "Skipping row {}: invalid year {:?}",
                        row.position().map(|p| p.line()).unwrap_or(0),
                        anno
                    );
                    continue;
                }
            };

            records.push(WasteRecord {
                comune,
                year,
                total_kg: parse_locale_number(&cell(&row, columns.total)),
                per_capita_kg: parse_locale_number(&cell(&row, columns.per_capita)),
                differentiated_kg: parse_thousands_number(&cell(&row, columns.differentiated)),
            });
        }

        Ok(Self::from_records(records))
    }
}
