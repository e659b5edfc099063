//! HTTP request handlers for the web frontend.

mod forms;
mod pages;
mod static_files;

pub use forms::{QueryForm, FIELD_REQUIRED, NOT_AN_INTEGER};
pub use pages::{
    all_years_page, all_years_submit, collection_page, collection_submit, extremes_page,
    extremes_submit, index, total_waste_page, total_waste_submit, BACKEND_ERROR,
    DATE_NOT_AVAILABLE,
};
pub use static_files::serve_css;
