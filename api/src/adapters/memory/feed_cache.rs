//! In-memory single-slot feed cache

use std::sync::RwLock;

use crate::domain::ports::{CachedFeed, FeedCache};

/// Process-wide single-slot cache.
///
/// Each runtime instance holds its own copy; there is no shared or
/// distributed state. Concurrent cold misses may both run the pipeline and
/// race to store — the value is immutable once built, so the last writer
/// wins without corruption.
#[derive(Default)]
pub struct InMemoryFeedCache {
    slot: RwLock<Option<CachedFeed>>,
}

impl InMemoryFeedCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FeedCache for InMemoryFeedCache {
    fn load(&self) -> Option<CachedFeed> {
        self.slot.read().unwrap().clone()
    }

    fn store(&self, feed: CachedFeed) {
        *self.slot.write().unwrap() = Some(feed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn starts_empty() {
        assert!(InMemoryFeedCache::new().load().is_none());
    }

    #[test]
    fn store_overwrites_the_slot() {
        let cache = InMemoryFeedCache::new();
        let now = Utc::now();

        cache.store(CachedFeed {
            xml: "first".to_string(),
            rendered_at: now,
        });
        cache.store(CachedFeed {
            xml: "second".to_string(),
            rendered_at: now,
        });

        assert_eq!(cache.load().unwrap().xml, "second");
    }

    #[test]
    fn age_is_measured_from_rendered_at() {
        let now = Utc::now();
        let feed = CachedFeed {
            xml: String::new(),
            rendered_at: now - chrono::Duration::seconds(42),
        };

        assert_eq!(feed.age_seconds(now), 42);
    }
}
