//! Web frontend for the waste query service.
//!
//! Renders query forms, forwards them to the query service over HTTP and
//! shows the results. It never reads the dataset itself.

mod assets;
mod handlers;
mod routes;
mod template_structs;

pub use routes::create_router;

use std::net::SocketAddr;
use std::time::Duration;

use crate::config::Settings;
use crate::http_client::BackendClient;

/// Shared state for the web frontend.
#[derive(Clone)]
pub struct WebState {
    pub client: BackendClient,
}

impl WebState {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let client = BackendClient::new(
            &settings.backend_url,
            Duration::from_secs(settings.request_timeout),
        )?;
        Ok(Self { client })
    }
}

/// Start the web frontend.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = WebState::new(settings)?;
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!(
        "Starting web frontend at http://{} (backend: {})",
        addr,
        settings.backend_url
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::handlers::{BACKEND_ERROR, DATE_NOT_AVAILABLE, FIELD_REQUIRED, NOT_AN_INTEGER};
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tempfile::tempdir;
    use tower::ServiceExt;

    use crate::server;

    const DATASET: &str = "\
Comune;Anno;Rifiuto totale (in Kg);Rifiuto totale pro capite (in Kg);Raccolta differenziata (in Kg)
Trento;2019;50.000.000;430,50;100
Trento;2020;52.500.000;455,25;150
Rovereto;2020;20.000.000;500,75;80
Riva del Garda;2020;9.000.000;390,10;n.d.
";

    /// Run a query service on an ephemeral port and point a frontend at it.
    async fn setup_test_app() -> (axum::Router, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let dataset_path = dir.path().join("filedati.csv");
        std::fs::write(&dataset_path, DATASET).unwrap();

        let backend = server::create_router(server::AppState { dataset_path });
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, backend).await.unwrap();
        });

        let client =
            BackendClient::new(&format!("http://{}", addr), Duration::from_secs(5)).unwrap();
        (create_router(WebState { client }), dir)
    }

    /// Frontend whose backend address refuses connections.
    fn setup_offline_app() -> axum::Router {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client =
            BackendClient::new(&format!("http://{}", addr), Duration::from_secs(2)).unwrap();
        create_router(WebState { client })
    }

    /// Frontend whose backend answers every request with `stub`.
    async fn setup_stubbed_app(stub: axum::Router) -> axum::Router {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, stub).await.unwrap();
        });

        let client =
            BackendClient::new(&format!("http://{}", addr), Duration::from_secs(5)).unwrap();
        create_router(WebState { client })
    }

    fn failing_backend() -> axum::Router {
        axum::Router::new().fallback(|| async { StatusCode::INTERNAL_SERVER_ERROR })
    }

    fn garbled_backend() -> axum::Router {
        axum::Router::new().fallback(|| async { "<html>maintenance</html>" })
    }

    async fn body_text(response: axum::response::Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }

    async fn get_page(app: axum::Router, uri: &str) -> String {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        body_text(response).await
    }

    async fn post_form(app: axum::Router, uri: &str, form: &str) -> String {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(form.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        body_text(response).await
    }

    #[tokio::test]
    async fn test_index_shows_backend_date() {
        let (app, _dir) = setup_test_app().await;
        let html = get_page(app, "/").await;
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(!html.contains(DATE_NOT_AVAILABLE));
    }

    #[tokio::test]
    async fn test_index_without_backend() {
        let html = get_page(setup_offline_app(), "/").await;
        assert!(html.contains(DATE_NOT_AVAILABLE));
    }

    #[tokio::test]
    async fn test_index_with_failing_backend() {
        for stub in [failing_backend(), garbled_backend()] {
            let html = get_page(setup_stubbed_app(stub).await, "/").await;
            assert!(html.contains(DATE_NOT_AVAILABLE));
        }
    }

    #[tokio::test]
    async fn test_pages_with_failing_backend() {
        for stub in [failing_backend(), garbled_backend()] {
            let app = setup_stubbed_app(stub).await;

            let html = post_form(app.clone(), "/total_waste_all_years", "comune=Trento").await;
            assert!(html.contains(BACKEND_ERROR));

            let html = post_form(app.clone(), "/find_municipalities_by_waste", "year=2020").await;
            assert!(html.contains(BACKEND_ERROR));

            let html = post_form(app.clone(), "/raccolta_differenziata", "comune=Trento").await;
            assert!(html.contains(BACKEND_ERROR));

            let html = post_form(app, "/internal", "comune=Trento&year=2020").await;
            assert!(html.contains("Error: Unable to fetch total waste data for Trento in 2020"));
        }
    }

    #[tokio::test]
    async fn test_forms_render_empty() {
        let (app, _dir) = setup_test_app().await;
        for uri in [
            "/internal",
            "/total_waste_all_years",
            "/find_municipalities_by_waste",
            "/raccolta_differenziata",
        ] {
            let html = get_page(app.clone(), uri).await;
            assert!(html.contains("<form method=\"post\""), "{}", uri);
            assert!(!html.contains("class=\"error\""), "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_total_waste_result() {
        let (app, _dir) = setup_test_app().await;
        let html = post_form(app, "/internal", "comune=Trento&year=2020").await;
        assert!(html.contains("52.500.000 kg"));
    }

    #[tokio::test]
    async fn test_total_waste_not_found() {
        let (app, _dir) = setup_test_app().await;
        let html = post_form(app, "/internal", "comune=Bolzano&year=2020").await;
        assert!(html.contains("No data found for the specified Comune and Year."));
    }

    #[tokio::test]
    async fn test_total_waste_encodes_names() {
        let (app, _dir) = setup_test_app().await;
        let html = post_form(app, "/internal", "comune=Riva+del+Garda&year=2020").await;
        assert!(html.contains("9.000.000 kg"));
    }

    #[tokio::test]
    async fn test_total_waste_validation() {
        let (app, _dir) = setup_test_app().await;
        let html = post_form(app.clone(), "/internal", "comune=&year=").await;
        assert!(html.contains(FIELD_REQUIRED));

        let html = post_form(app, "/internal", "comune=Trento&year=abc").await;
        assert!(html.contains(NOT_AN_INTEGER));
        assert!(!html.contains("id=\"total-waste\""));
    }

    #[tokio::test]
    async fn test_total_waste_backend_down() {
        let html = post_form(setup_offline_app(), "/internal", "comune=Trento&year=2020").await;
        assert!(html.contains("Error: Unable to fetch total waste data for Trento in 2020"));
    }

    #[tokio::test]
    async fn test_all_years_table() {
        let (app, _dir) = setup_test_app().await;
        let html = post_form(app, "/total_waste_all_years", "comune=Trento").await;
        assert!(html.contains("<td>2019</td>"));
        assert!(html.contains("50.000.000"));
        assert!(html.contains("<td>2020</td>"));
    }

    #[tokio::test]
    async fn test_all_years_unknown_comune() {
        let (app, _dir) = setup_test_app().await;
        let html = post_form(app, "/total_waste_all_years", "comune=Bolzano").await;
        assert!(html.contains("No data found for the specified Comune."));
        assert!(!html.contains("<table"));
    }

    #[tokio::test]
    async fn test_all_years_backend_down() {
        let html = post_form(setup_offline_app(), "/total_waste_all_years", "comune=Trento").await;
        assert!(html.contains(BACKEND_ERROR));
    }

    #[tokio::test]
    async fn test_extremes_page() {
        let (app, _dir) = setup_test_app().await;
        let html = post_form(app, "/find_municipalities_by_waste", "year=2020").await;
        assert!(html.contains("Rovereto"));
        assert!(html.contains("500,75"));
        assert!(html.contains("Riva del Garda"));
        assert!(html.contains("390,10"));
    }

    #[tokio::test]
    async fn test_extremes_unknown_year() {
        let (app, _dir) = setup_test_app().await;
        let html = post_form(app, "/find_municipalities_by_waste", "year=1990").await;
        assert!(html.contains("No data available for the specified year"));
    }

    #[tokio::test]
    async fn test_collection_page() {
        let (app, _dir) = setup_test_app().await;
        let html = post_form(app, "/raccolta_differenziata", "comune=Trento").await;
        assert!(html.contains("+50,00%"));
        assert!(html.contains("<td>2019</td>"));
    }

    #[tokio::test]
    async fn test_collection_insufficient_data() {
        let (app, _dir) = setup_test_app().await;
        let html = post_form(app, "/raccolta_differenziata", "comune=Rovereto").await;
        assert!(html.contains("Insufficient data for percentage change calculation"));
    }

    #[tokio::test]
    async fn test_static_css() {
        let app = setup_offline_app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/static/style.css")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get("content-type")
            .map(|v| v.to_str().unwrap_or(""));
        assert!(content_type.unwrap_or("").contains("css"));
    }
}
