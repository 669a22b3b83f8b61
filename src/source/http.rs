// src/source/http.rs
// Reference document fetched over HTTP

use crate::error::{Result, SimcheckError};
use crate::source::ReferenceSource;
use async_trait::async_trait;
use tracing::debug;
use url::Url;

/// Reference text fetched from a URL with a single GET
pub struct HttpSource {
    url: Url,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ReferenceSource for HttpSource {
    async fn fetch(&self) -> Result<String> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                SimcheckError::ReferenceUnavailable(format!("GET {} failed: {}", self.url, e))
            })?;

        let text = response.text().await.map_err(|e| {
            SimcheckError::ReferenceUnavailable(format!(
                "failed to read body from {}: {}",
                self.url, e
            ))
        })?;
        debug!(url = %self.url, bytes = text.len(), "Fetched reference document");
        Ok(text)
    }

    fn describe(&self) -> String {
        format!("url {}", self.url)
    }
}
