//! Feed cache port trait
//!
//! The whole feed is one cache entry, so the port is a single slot: load
//! whatever was rendered last, or overwrite it. Staleness policy lives in
//! the feed service; implementations never evict on their own.

use chrono::{DateTime, Utc};

/// A rendered feed plus the instant it was produced.
#[derive(Debug, Clone)]
pub struct CachedFeed {
    pub xml: String,
    pub rendered_at: DateTime<Utc>,
}

impl CachedFeed {
    /// Age of the entry in whole seconds at `now`.
    pub fn age_seconds(&self, now: DateTime<Utc>) -> i64 {
        (now - self.rendered_at).num_seconds()
    }
}

/// Single-slot cache for the rendered feed.
pub trait FeedCache: Send + Sync {
    /// The last stored feed, if any.
    fn load(&self) -> Option<CachedFeed>;

    /// Overwrite the slot.
    fn store(&self, feed: CachedFeed);
}
