//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod cache;
pub mod site;

pub use cache::{CachedFeed, FeedCache};
pub use site::SiteClient;
