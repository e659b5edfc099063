//! HTTP client for the waste query service.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{
    CollectionChange, DateResponse, QueryOutcome, TotalWasteAllYearsResponse, TotalWasteResponse,
    WasteExtremes,
};

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("wasteboard/", env!("CARGO_PKG_VERSION"));

/// Failures talking to the query service.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
    #[error("Failed to connect to {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Server returned {status}: {url}")]
    Status { url: String, status: StatusCode },
    #[error("Failed to parse response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Client for the query service JSON API.
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client for the service at `base_url`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a path and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ClientError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { url, status });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| ClientError::Decode { url, source })
    }

    /// Current date as reported by the service; `None` if it sent none.
    pub async fn current_date(&self) -> Result<Option<String>, ClientError> {
        let response: DateResponse = self.get_json("/get-date").await?;
        Ok(response.date)
    }

    pub async fn total_waste(
        &self,
        comune: &str,
        year: i32,
    ) -> Result<TotalWasteResponse, ClientError> {
        self.get_json(&format!("/total_waste/{}/{}", segment(comune), year))
            .await
    }

    pub async fn total_waste_all_years(
        &self,
        comune: &str,
    ) -> Result<TotalWasteAllYearsResponse, ClientError> {
        self.get_json(&format!("/total_waste_all_years/{}", segment(comune)))
            .await
    }

    pub async fn find_extremes(
        &self,
        year: i32,
    ) -> Result<QueryOutcome<WasteExtremes>, ClientError> {
        self.get_json(&format!("/find_municipalities_by_waste/{}", year))
            .await
    }

    pub async fn collection_change(
        &self,
        comune: &str,
    ) -> Result<QueryOutcome<CollectionChange>, ClientError> {
        self.get_json(&format!("/raccolta_differenziata/{}", segment(comune)))
            .await
    }
}

/// Percent-encode a value for use as a single path segment.
fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let client = BackendClient::new("http://backend/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://backend");
    }

    #[test]
    fn test_segment_encoding() {
        assert_eq!(segment("Riva del Garda"), "Riva%20del%20Garda");
        assert_eq!(segment("Sant'Orsola/Terme"), "Sant%27Orsola%2FTerme");
    }

    /// Serve `stub` on an ephemeral port and return a client pointed at it.
    async fn stub_client(stub: axum::Router) -> BackendClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, stub).await.unwrap();
        });
        BackendClient::new(&format!("http://{}", addr), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_error_status() {
        let stub = axum::Router::new().fallback(|| async { StatusCode::INTERNAL_SERVER_ERROR });
        let client = stub_client(stub).await;

        let err = client.total_waste("Trento", 2020).await.unwrap_err();
        match err {
            ClientError::Status { url, status } => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert!(url.ends_with("/total_waste/Trento/2020"));
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_undecodable_body() {
        let stub = axum::Router::new().fallback(|| async { "<html>maintenance</html>" });
        let client = stub_client(stub).await;

        let err = client.current_date().await.unwrap_err();
        assert!(matches!(err, ClientError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_backend() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client =
            BackendClient::new(&format!("http://{}", addr), Duration::from_secs(2)).unwrap();
        let err = client.current_date().await.unwrap_err();
        assert!(matches!(err, ClientError::Request { .. }));
    }
}
