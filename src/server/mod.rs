//! Query service: JSON endpoints over the waste dataset.
//!
//! The dataset is re-read on every request; the router state only carries
//! its path.

mod handlers;
mod routes;

pub use routes::create_router;

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::config::Settings;

/// Shared state for the query service.
#[derive(Clone)]
pub struct AppState {
    pub dataset_path: PathBuf,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            dataset_path: settings.dataset_path.clone(),
        }
    }
}

/// Start the query service.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let app = create_router(AppState::new(settings));

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!(
        "Starting query service at http://{} (dataset: {})",
        addr,
        settings.dataset_path.display()
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
