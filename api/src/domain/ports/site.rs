//! Site client port trait
//!
//! Defines the interface for fetching the portfolio site's public assets.
//! The feed service resolves URLs; implementations only perform the GET.

use async_trait::async_trait;

use crate::error::FetchError;

/// Outbound interface to the portfolio site.
#[async_trait]
pub trait SiteClient: Send + Sync {
    /// Fetch a page body as text (used for the site root HTML).
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;

    /// Fetch and parse a JSON asset.
    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value, FetchError>;
}
