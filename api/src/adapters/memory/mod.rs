//! In-memory adapters

pub mod feed_cache;

pub use feed_cache::InMemoryFeedCache;
