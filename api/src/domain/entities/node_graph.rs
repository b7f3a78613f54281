//! Node-graph document types
//!
//! The portfolio site embeds an internal JSON document produced by its
//! rendering tool: a flat map of opaque node ids to heterogeneous node
//! records. The schema is not published, so only the two shapes the
//! extractor recognizes are typed here; everything else deserializes into
//! `Unknown` and is skipped, never rejected.

use std::collections::HashMap;

use serde::Deserialize;

/// The site's internal document, as fetched from its JSON asset URL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteDocument {
    #[serde(rename = "nodeById")]
    pub node_by_id: Option<HashMap<String, RawNode>>,
}

/// One entry in the node graph.
///
/// A single node may carry both a text payload and interaction records, in
/// which case it deserializes as `Text` and the accessors below still expose
/// both facets.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawNode {
    Text(TextNode),
    Interactive(InteractiveNode),
    Unknown(serde_json::Value),
}

/// A node with a type discriminator and a character payload.
#[derive(Debug, Clone, Deserialize)]
pub struct TextNode {
    #[serde(rename = "type")]
    pub kind: String,
    pub characters: String,
    #[serde(default)]
    pub interactions: Vec<Interaction>,
}

/// A node exposing interaction records.
#[derive(Debug, Clone, Deserialize)]
pub struct InteractiveNode {
    pub interactions: Vec<Interaction>,
}

/// One interaction record; its actions may navigate to another page.
#[derive(Debug, Clone, Deserialize)]
pub struct Interaction {
    #[serde(default)]
    pub actions: Vec<NodeAction>,
}

/// One action inside an interaction record.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeAction {
    #[serde(rename = "connectionURL")]
    pub connection_url: Option<String>,
}

impl RawNode {
    /// Character payload, present only for TEXT-typed nodes.
    pub fn text(&self) -> Option<&str> {
        match self {
            RawNode::Text(node) if node.kind == "TEXT" => Some(&node.characters),
            RawNode::Text(_) | RawNode::Interactive(_) | RawNode::Unknown(_) => None,
        }
    }

    /// Interaction records, whatever the node's shape.
    pub fn interactions(&self) -> &[Interaction] {
        match self {
            RawNode::Text(node) => &node.interactions,
            RawNode::Interactive(node) => &node.interactions,
            RawNode::Unknown(_) => &[],
        }
    }
}
