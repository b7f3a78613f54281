//! Mock implementations of port traits

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::SiteClient;
use crate::error::FetchError;

enum MockResponse<T> {
    Ok(T),
    Status(u16),
}

/// Configurable in-memory site client.
///
/// Responses are fixed per hop; every request URL is recorded so tests can
/// assert how often (and where) the service went to the network.
pub struct MockSiteClient {
    html: RwLock<MockResponse<String>>,
    json: RwLock<MockResponse<serde_json::Value>>,
    requests: RwLock<Vec<String>>,
}

impl MockSiteClient {
    pub fn new() -> Self {
        Self {
            html: RwLock::new(MockResponse::Status(404)),
            json: RwLock::new(MockResponse::Status(404)),
            requests: RwLock::new(Vec::new()),
        }
    }

    pub fn with_html(self, body: &str) -> Self {
        *self.html.write().unwrap() = MockResponse::Ok(body.to_string());
        self
    }

    pub fn with_html_status(self, status: u16) -> Self {
        *self.html.write().unwrap() = MockResponse::Status(status);
        self
    }

    pub fn with_json(self, value: serde_json::Value) -> Self {
        *self.json.write().unwrap() = MockResponse::Ok(value);
        self
    }

    pub fn with_json_status(self, status: u16) -> Self {
        *self.json.write().unwrap() = MockResponse::Status(status);
        self
    }

    /// URLs requested so far, in order.
    pub fn requested_urls(&self) -> Vec<String> {
        self.requests.read().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.read().unwrap().len()
    }

    fn record(&self, url: &str) {
        self.requests.write().unwrap().push(url.to_string());
    }
}

impl Default for MockSiteClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SiteClient for MockSiteClient {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        self.record(url);
        match &*self.html.read().unwrap() {
            MockResponse::Ok(body) => Ok(body.clone()),
            MockResponse::Status(status) => Err(FetchError::Status {
                url: url.to_string(),
                status: *status,
            }),
        }
    }

    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value, FetchError> {
        self.record(url);
        match &*self.json.read().unwrap() {
            MockResponse::Ok(value) => Ok(value.clone()),
            MockResponse::Status(status) => Err(FetchError::Status {
                url: url.to_string(),
                status: *status,
            }),
        }
    }
}
