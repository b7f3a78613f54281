//! Portfolio site HTTP client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::ports::SiteClient;
use crate::error::FetchError;

/// Client identifier sent on every outbound request.
const CLIENT_USER_AGENT: &str = "Mozilla/5.0 (compatible; RSS-Generator/1.0)";

/// Upper bound on each outbound call; there is no retry policy, so a slow
/// remote site would otherwise stall the whole request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// `reqwest`-backed implementation of the site client port.
pub struct HttpSiteClient {
    http: Client,
}

impl HttpSiteClient {
    pub fn new() -> Self {
        Self {
            http: Client::builder()
                .user_agent(CLIENT_USER_AGENT)
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("reqwest client configuration is valid"),
        }
    }

    async fn get_checked(&self, url: &str) -> Result<reqwest::Response, FetchError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else {
            Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            })
        }
    }
}

impl Default for HttpSiteClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SiteClient for HttpSiteClient {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        Ok(self.get_checked(url).await?.text().await?)
    }

    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value, FetchError> {
        self.get_checked(url)
            .await?
            .json()
            .await
            .map_err(|e| FetchError::Deserialization(e.to_string()))
    }
}
