//! Feed service
//!
//! Orchestrates the scrape-and-extract pipeline behind the cache gate: fetch
//! the site root HTML, discover the embedded JSON document URL, extract
//! project items from the node graph, render RSS, and cache the result for
//! the TTL window. Every pipeline failure is downgraded to a one-item
//! fallback feed; only the renderer itself can error past this service.

use std::sync::Arc;

use chrono::Utc;
use regex::Regex;

use crate::app::extractor::{default_portfolio_item, extract_projects};
use crate::domain::entities::{item_guid, FeedItem, SiteDocument};
use crate::domain::ports::{CachedFeed, FeedCache, SiteClient};
use crate::error::{FetchError, RenderError};
use crate::feed::render_feed;

/// How long a rendered feed stays fresh. The gate never revalidates early
/// and never evicts proactively.
pub const FEED_TTL_SECONDS: i64 = 900;

/// Which stage of the pipeline degraded to fallback content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackStage {
    /// The site HTML could not be fetched.
    HtmlFetch,
    /// The HTML carried no preload link to the internal JSON document.
    JsonUrlMissing,
    /// The JSON document could not be fetched or parsed.
    JsonFetch,
}

impl FallbackStage {
    /// Marker embedded in the fallback item's guid, so the failing stage is
    /// observable from the feed itself.
    pub fn guid_marker(self) -> &'static str {
        match self {
            FallbackStage::HtmlFetch => "error-fallback",
            FallbackStage::JsonUrlMissing => "html-fallback",
            FallbackStage::JsonFetch => "json-fallback",
        }
    }

    fn description(self) -> &'static str {
        match self {
            FallbackStage::HtmlFetch => {
                "Jason Spielman is a designer focused on UX design, brand identity, and \
                 digital experiences. Visit the portfolio to see the latest work."
            }
            FallbackStage::JsonUrlMissing => {
                "Visit Jason Spielman's portfolio to see latest design work including UX \
                 design, brand identity, and digital experiences."
            }
            FallbackStage::JsonFetch => {
                "Latest design work from Jason Spielman. The full project list is \
                 temporarily unavailable - visit the portfolio directly."
            }
        }
    }
}

/// A stage failure, downgraded to fallback content at the service boundary.
#[derive(Debug)]
struct StageFailure {
    stage: FallbackStage,
    cause: Option<FetchError>,
}

/// Service generating the portfolio RSS feed.
pub struct FeedService<SC, FC>
where
    SC: SiteClient,
    FC: FeedCache,
{
    site: Arc<SC>,
    cache: Arc<FC>,
    site_url: String,
    deploy_host: Option<String>,
}

impl<SC, FC> FeedService<SC, FC>
where
    SC: SiteClient,
    FC: FeedCache,
{
    pub fn new(
        site: Arc<SC>,
        cache: Arc<FC>,
        site_url: String,
        deploy_host: Option<String>,
    ) -> Self {
        Self {
            site,
            cache,
            site_url,
            deploy_host,
        }
    }

    /// Return the rendered feed, serving from cache within the TTL window.
    pub async fn rss_feed(&self) -> Result<String, RenderError> {
        let now = Utc::now();
        if let Some(cached) = self.cache.load() {
            if cached.age_seconds(now) < FEED_TTL_SECONDS {
                tracing::debug!("serving cached feed");
                return Ok(cached.xml);
            }
        }

        tracing::info!("regenerating feed");
        let items = self.fetch_items().await;
        let xml = render_feed(&items, self.deploy_host.as_deref())?;
        self.cache.store(CachedFeed {
            xml: xml.clone(),
            rendered_at: now,
        });
        Ok(xml)
    }

    /// Run the two-hop scrape and extraction. Never fails: every failure
    /// path resolves to a one-item fallback identifying the failing stage.
    pub async fn fetch_items(&self) -> Vec<FeedItem> {
        match self.scrape().await {
            Ok(items) => items,
            Err(failure) => {
                match &failure.cause {
                    Some(cause) => tracing::warn!(
                        stage = ?failure.stage,
                        error = %cause,
                        "pipeline degraded to fallback"
                    ),
                    None => tracing::warn!(
                        stage = ?failure.stage,
                        "pipeline degraded to fallback"
                    ),
                }
                vec![self.fallback_item(failure.stage)]
            }
        }
    }

    async fn scrape(&self) -> Result<Vec<FeedItem>, StageFailure> {
        let html = self
            .site
            .fetch_text(&self.site_url)
            .await
            .map_err(|e| StageFailure {
                stage: FallbackStage::HtmlFetch,
                cause: Some(e),
            })?;

        let Some(json_path) = find_json_asset_path(&html) else {
            return Err(StageFailure {
                stage: FallbackStage::JsonUrlMissing,
                cause: None,
            });
        };

        let json_url = format!("{}{}", self.site_url, json_path);
        tracing::debug!(%json_url, "discovered site document url");

        let raw = self
            .site
            .fetch_json(&json_url)
            .await
            .map_err(|e| StageFailure {
                stage: FallbackStage::JsonFetch,
                cause: Some(e),
            })?;
        let document: SiteDocument = serde_json::from_value(raw).map_err(|e| StageFailure {
            stage: FallbackStage::JsonFetch,
            cause: Some(FetchError::Deserialization(e.to_string())),
        })?;

        let now = Utc::now();
        let mut items = extract_projects(&document, &self.site_url, now);
        if items.is_empty() {
            // The document had no usable node map; keep the renderer's
            // non-empty contract intact.
            items.push(default_portfolio_item(&self.site_url, now));
        }

        tracing::info!(count = items.len(), "extracted feed items");
        Ok(items)
    }

    fn fallback_item(&self, stage: FallbackStage) -> FeedItem {
        FeedItem {
            title: "Jason Spielman - Design Portfolio".to_string(),
            link: self.site_url.clone(),
            description: stage.description().to_string(),
            pub_date: Utc::now(),
            guid: item_guid(stage.guid_marker(), stage.guid_marker()),
        }
    }
}

/// Scan the HTML for the preload link naming the site's internal JSON
/// document.
fn find_json_asset_path(html: &str) -> Option<String> {
    let pattern = Regex::new(r#""preload"[^>]*href="([^"]*/_json/[^"]*\.json)""#).unwrap();
    Some(pattern.captures(html)?.get(1)?.as_str().to_string())
}
