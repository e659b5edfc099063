//! Askama template structs for the web interface.
//!
//! Each struct corresponds to an HTML template in the templates/ directory.
//! Askama provides compile-time verification that templates are valid.

use askama::Template;

use super::handlers::QueryForm;

/// Query form as rendered: which fields to show, echoed input, field errors.
pub struct FormView {
    pub action: &'static str,
    pub submit_label: &'static str,
    pub show_comune: bool,
    pub show_year: bool,
    pub comune: String,
    pub year: String,
    pub comune_error: String,
    pub year_error: String,
}

impl FormView {
    pub fn new(action: &'static str, submit_label: &'static str) -> Self {
        Self {
            action,
            submit_label,
            show_comune: false,
            show_year: false,
            comune: String::new(),
            year: String::new(),
            comune_error: String::new(),
            year_error: String::new(),
        }
    }

    pub fn with_comune(mut self) -> Self {
        self.show_comune = true;
        self
    }

    pub fn with_year(mut self) -> Self {
        self.show_year = true;
        self
    }

    /// Echo the submitted values back into the form.
    pub fn filled(mut self, form: &QueryForm) -> Self {
        self.comune = form.comune.clone();
        self.year = form.year.clone();
        self
    }
}

/// One year of a per-year table.
pub struct YearRow {
    pub year: i32,
    pub value: String,
}

/// Landing page.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub title: &'a str,
    pub date_from_backend: String,
}

/// Total waste for one municipality and year.
#[derive(Template)]
#[template(path = "internal.html")]
pub struct TotalWasteTemplate<'a> {
    pub title: &'a str,
    pub form: FormView,
    pub has_result: bool,
    pub total_waste_result: String,
    pub has_error: bool,
    pub error_message: String,
}

/// Total waste per year for one municipality.
#[derive(Template)]
#[template(path = "all_years.html")]
pub struct AllYearsTemplate<'a> {
    pub title: &'a str,
    pub form: FormView,
    pub comune: String,
    pub rows: Vec<YearRow>,
    pub has_rows: bool,
    pub has_message: bool,
    pub message: String,
    pub has_error: bool,
    pub error_message: String,
}

/// Highest and lowest per-capita waste for a year.
#[derive(Template)]
#[template(path = "extremes.html")]
pub struct ExtremesTemplate<'a> {
    pub title: &'a str,
    pub form: FormView,
    pub has_result: bool,
    pub year: i32,
    pub max_municipality: String,
    pub max_value: String,
    pub min_municipality: String,
    pub min_value: String,
    pub has_error: bool,
    pub error_message: String,
}

/// Differentiated collection series and change.
#[derive(Template)]
#[template(path = "collection.html")]
pub struct CollectionTemplate<'a> {
    pub title: &'a str,
    pub form: FormView,
    pub comune: String,
    pub has_result: bool,
    pub rows: Vec<YearRow>,
    pub percentage_change: String,
    pub has_error: bool,
    pub error_message: String,
}
