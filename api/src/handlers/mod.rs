//! HTTP handlers

pub mod feed;

pub use feed::{get_rss, method_not_allowed, rss_preflight, RSS_CACHE_CONTROL, RSS_CONTENT_TYPE};
