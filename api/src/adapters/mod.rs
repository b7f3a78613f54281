//! Adapters layer
//!
//! Concrete implementations of the domain port traits.

pub mod http;
pub mod memory;

pub use http::HttpSiteClient;
pub use memory::InMemoryFeedCache;
