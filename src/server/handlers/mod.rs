//! HTTP request handlers for the query service.

mod api;
mod helpers;
mod waste;

// Re-export handlers for use by the router
pub use api::{get_date, health, read_root};
pub use waste::{
    find_municipalities_by_waste, raccolta_differenziata, total_waste, total_waste_all_years,
};
