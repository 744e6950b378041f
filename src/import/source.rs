//! Fetching CSV text for import.

use std::future::Future;

use super::ImportError;

/// Where CSV text comes from. One attempt per call; no retry, no timeout.
pub trait CsvSource {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, ImportError>> + Send;
}

/// HTTP source backed by a shared `reqwest` client
#[derive(Debug, Clone, Default)]
pub struct HttpSheetSource {
    client: reqwest::Client,
}

impl HttpSheetSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl CsvSource for HttpSheetSource {
    async fn fetch(&self, url: &str) -> Result<String, ImportError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ImportError::malformed(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImportError::malformed(url, format!("HTTP {}", status)));
        }

        response.text().await.map_err(|e| ImportError::malformed(url, e))
    }
}
