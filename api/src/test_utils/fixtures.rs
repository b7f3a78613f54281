//! Test fixtures
//!
//! Factory functions for realistic site inputs with sensible defaults.

use serde_json::json;

/// A minimal portfolio home page whose preload link points at `json_path`.
pub fn portfolio_home_html(json_path: &str) -> String {
    format!(
        r#"<!doctype html>
<html>
  <head>
    <meta charset="utf-8">
    <link rel="stylesheet" href="/css/site.css">
    <link rel="preload" href="{}" as="fetch" crossorigin>
  </head>
  <body><div id="root"></div></body>
</html>"#,
        json_path
    )
}

/// A site document containing one matching text node, one interactive node,
/// and assorted noise the extractor must ignore.
pub fn site_document() -> serde_json::Value {
    json!({
        "schemaVersion": 1,
        "nodeById": {
            "10:1": {
                "type": "TEXT",
                "characters": "We led the brand identity redesign for Acme, shipping a new design system."
            },
            "10:2": {
                "interactions": [
                    {"actions": [{"connectionURL": "/sound-design"}]}
                ]
            },
            "10:3": {
                "type": "FRAME",
                "children": ["10:1", "10:2"]
            },
            "10:4": 7
        }
    })
}
