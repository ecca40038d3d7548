use crate::domain::ports::ContentSource;
use crate::utils::error::{PortfolioError, Result};
use reqwest::Client;

/// 透過 HTTP 從已部署的網站讀取靜態內容
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
    client: Client,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl ContentSource for HttpSource {
    async fn fetch_text(&self, path: &str) -> Result<String> {
        let url = self.url_for(path);
        tracing::debug!("Making content request to: {}", url);

        let response = self.client.get(&url).send().await?;
        tracing::debug!("Content response status: {}", response.status());

        if !response.status().is_success() {
            return Err(PortfolioError::SourceUnavailable {
                path: path.to_string(),
                reason: format!("HTTP {}", response.status()),
            });
        }

        Ok(response.text().await?)
    }
}
