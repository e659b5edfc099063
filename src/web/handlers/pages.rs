//! Query page handlers.
//!
//! `GET` renders an empty form; `POST` validates it, asks the query service
//! and renders the answer. Backend failures become a message on the page.

use askama::Template;
use axum::{extract::State, response::Html, Form};

use super::super::template_structs::{
    AllYearsTemplate, CollectionTemplate, ExtremesTemplate, FormView, IndexTemplate,
    TotalWasteTemplate, YearRow,
};
use super::super::WebState;
use super::forms::QueryForm;
use crate::http_client::BackendClient;
use crate::models::{QueryOutcome, WasteLookup};
use crate::utils::{format_kg, format_percentage};

pub const DATE_NOT_AVAILABLE: &str = "Date not available";
pub const NO_DATA_AVAILABLE: &str = "No data available";
pub const BACKEND_ERROR: &str = "Error fetching data from backend.";

const TOTAL_WASTE_TITLE: &str = "Total waste";
const ALL_YEARS_TITLE: &str = "Total waste by year";
const EXTREMES_TITLE: &str = "Per-capita waste extremes";
const COLLECTION_TITLE: &str = "Raccolta differenziata";

fn render<T: Template>(template: T) -> Html<String> {
    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

fn submitted(form: Option<Form<QueryForm>>) -> QueryForm {
    form.map(|Form(f)| f).unwrap_or_default()
}

/// Landing page with the backend's current date.
pub async fn index(State(state): State<WebState>) -> Html<String> {
    let date_from_backend = fetch_date(&state.client).await;
    render(IndexTemplate {
        title: "Home",
        date_from_backend,
    })
}

async fn fetch_date(client: &BackendClient) -> String {
    match client.current_date().await {
        Ok(Some(date)) => date,
        Ok(None) => DATE_NOT_AVAILABLE.to_string(),
        Err(e) => {
            tracing::warn!("Error fetching date from backend: {}", e);
            DATE_NOT_AVAILABLE.to_string()
        }
    }
}

// Total waste for a comune and year

fn total_waste_template(form: FormView) -> TotalWasteTemplate<'static> {
    TotalWasteTemplate {
        title: TOTAL_WASTE_TITLE,
        form,
        has_result: false,
        total_waste_result: String::new(),
        has_error: false,
        error_message: String::new(),
    }
}

fn total_waste_form() -> FormView {
    FormView::new("/internal", "Get total waste")
        .with_comune()
        .with_year()
}

fn describe_lookup(lookup: Option<WasteLookup>) -> String {
    match lookup {
        Some(WasteLookup::Found(Some(kg))) => format!("{} kg", format_kg(kg)),
        Some(WasteLookup::Missing(message)) => message,
        Some(WasteLookup::Found(None)) | None => NO_DATA_AVAILABLE.to_string(),
    }
}

pub async fn total_waste_page() -> Html<String> {
    render(total_waste_template(total_waste_form()))
}

pub async fn total_waste_submit(
    State(state): State<WebState>,
    form: Option<Form<QueryForm>>,
) -> Html<String> {
    let input = submitted(form);
    let mut template = total_waste_template(total_waste_form().filled(&input));

    let comune = input.comune();
    let year = input.year();
    if let Err(e) = &comune {
        template.form.comune_error = e.to_string();
    }
    if let Err(e) = &year {
        template.form.year_error = e.to_string();
    }

    if let (Ok(comune), Ok(year)) = (comune, year) {
        match state.client.total_waste(&comune, year).await {
            Ok(response) => {
                template.has_result = true;
                template.total_waste_result = describe_lookup(response.total_waste);
            }
            Err(e) => {
                tracing::warn!("{}", e);
                template.has_error = true;
                template.error_message = format!(
                    "Error: Unable to fetch total waste data for {} in {}",
                    comune, year
                );
            }
        }
        template.form.comune = comune;
    }

    render(template)
}

// Total waste for every year of a comune

fn all_years_template(form: FormView) -> AllYearsTemplate<'static> {
    AllYearsTemplate {
        title: ALL_YEARS_TITLE,
        form,
        comune: String::new(),
        rows: Vec::new(),
        has_rows: false,
        has_message: false,
        message: String::new(),
        has_error: false,
        error_message: String::new(),
    }
}

fn all_years_form() -> FormView {
    FormView::new("/total_waste_all_years", "Get all years").with_comune()
}

pub async fn all_years_page() -> Html<String> {
    render(all_years_template(all_years_form()))
}

pub async fn all_years_submit(
    State(state): State<WebState>,
    form: Option<Form<QueryForm>>,
) -> Html<String> {
    let input = submitted(form);
    let mut template = all_years_template(all_years_form().filled(&input));

    let comune = match input.comune() {
        Ok(c) => c,
        Err(e) => {
            template.form.comune_error = e.to_string();
            return render(template);
        }
    };

    match state.client.total_waste_all_years(&comune).await {
        Ok(response) => {
            template.rows = response
                .total_waste_data
                .into_iter()
                .map(|(year, kg)| YearRow {
                    year,
                    value: kg.map(format_kg).unwrap_or_else(|| "n/a".to_string()),
                })
                .collect();
            template.has_rows = !template.rows.is_empty();
            if let Some(message) = response.message {
                template.has_message = true;
                template.message = message;
            } else if !template.has_rows {
                template.has_message = true;
                template.message = NO_DATA_AVAILABLE.to_string();
            }
        }
        Err(e) => {
            tracing::warn!("{}", e);
            template.has_error = true;
            template.error_message = BACKEND_ERROR.to_string();
        }
    }
    template.comune = comune;

    render(template)
}

// Highest and lowest per-capita waste for a year

fn extremes_template(form: FormView) -> ExtremesTemplate<'static> {
    ExtremesTemplate {
        title: EXTREMES_TITLE,
        form,
        has_result: false,
        year: 0,
        max_municipality: String::new(),
        max_value: String::new(),
        min_municipality: String::new(),
        min_value: String::new(),
        has_error: false,
        error_message: String::new(),
    }
}

fn extremes_form() -> FormView {
    FormView::new("/find_municipalities_by_waste", "Find municipalities").with_year()
}

pub async fn extremes_page() -> Html<String> {
    render(extremes_template(extremes_form()))
}

pub async fn extremes_submit(
    State(state): State<WebState>,
    form: Option<Form<QueryForm>>,
) -> Html<String> {
    let input = submitted(form);
    let mut template = extremes_template(extremes_form().filled(&input));

    let year = match input.year() {
        Ok(y) => y,
        Err(e) => {
            template.form.year_error = e.to_string();
            return render(template);
        }
    };

    match state.client.find_extremes(year).await {
        Ok(QueryOutcome::Success(extremes)) => {
            template.has_result = true;
            template.year = extremes.year;
            template.max_municipality = extremes.max_municipality;
            template.max_value = format_kg(extremes.max_value);
            template.min_municipality = extremes.min_municipality;
            template.min_value = format_kg(extremes.min_value);
        }
        Ok(QueryOutcome::Failure { error }) => {
            template.has_error = true;
            template.error_message = error;
        }
        Err(e) => {
            tracing::warn!("{}", e);
            template.has_error = true;
            template.error_message = BACKEND_ERROR.to_string();
        }
    }

    render(template)
}

// Raccolta differenziata change for a comune

fn collection_template(form: FormView) -> CollectionTemplate<'static> {
    CollectionTemplate {
        title: COLLECTION_TITLE,
        form,
        comune: String::new(),
        has_result: false,
        rows: Vec::new(),
        percentage_change: String::new(),
        has_error: false,
        error_message: String::new(),
    }
}

fn collection_form() -> FormView {
    FormView::new("/raccolta_differenziata", "Get trend").with_comune()
}

pub async fn collection_page() -> Html<String> {
    render(collection_template(collection_form()))
}

pub async fn collection_submit(
    State(state): State<WebState>,
    form: Option<Form<QueryForm>>,
) -> Html<String> {
    let input = submitted(form);
    let mut template = collection_template(collection_form().filled(&input));

    let comune = match input.comune() {
        Ok(c) => c,
        Err(e) => {
            template.form.comune_error = e.to_string();
            return render(template);
        }
    };

    match state.client.collection_change(&comune).await {
        Ok(QueryOutcome::Success(change)) => {
            template.has_result = true;
            template.rows = change
                .series
                .into_iter()
                .map(|(year, kg)| YearRow {
                    year,
                    value: format_kg(kg),
                })
                .collect();
            template.percentage_change = format_percentage(change.percentage_change);
        }
        Ok(QueryOutcome::Failure { error }) => {
            template.has_error = true;
            template.error_message = error;
        }
        Err(e) => {
            tracing::warn!("{}", e);
            template.has_error = true;
            template.error_message = BACKEND_ERROR.to_string();
        }
    }
    template.comune = comune;

    render(template)
}
