//! Domain entities

pub mod feed_item;
pub mod node_graph;

pub use feed_item::{item_guid, FeedItem};
pub use node_graph::{Interaction, InteractiveNode, NodeAction, RawNode, SiteDocument, TextNode};
