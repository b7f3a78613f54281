//! Application layer
//!
//! The extraction pipeline and the service orchestrating it behind the
//! cache gate.

pub mod extractor;
pub mod feed_service;

pub use feed_service::{FallbackStage, FeedService, FEED_TTL_SECONDS};
