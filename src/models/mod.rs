//! Data models for wasteboard.

mod api;
mod record;
mod report;

pub use api::{
    DateResponse, QueryOutcome, TotalWasteAllYearsResponse, TotalWasteResponse, WasteLookup,
};
pub use record::WasteRecord;
pub use report::{CollectionChange, WasteExtremes};
