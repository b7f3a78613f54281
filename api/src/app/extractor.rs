//! Node-graph extractor
//!
//! Walks the portfolio site's internal node-graph document and heuristically
//! recovers project-like entries. The document is a rendering tool's internal
//! graph, not a published API, so this is permissive pattern-matching: a
//! structural anomaly yields fewer items, never a failure, and the outer
//! request is never failed just because the heuristics found nothing.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::domain::entities::{item_guid, FeedItem, SiteDocument};

/// Keywords that mark a text node as plausibly describing a project.
const PROJECT_KEYWORDS: [&str; 6] = ["design", "developed", "led", "identity", "brand", "ux"];

/// Bounds (exclusive) on a text payload worth turning into an item.
const MIN_TEXT_LEN: usize = 30;
const MAX_TEXT_LEN: usize = 200;

/// Longest name a navigation path is allowed to produce.
const MAX_PROJECT_NAME_LEN: usize = 30;

/// Titles longer than this are truncated with an ellipsis.
const MAX_TITLE_LEN: usize = 80;

/// At most this many items survive to the rendered feed.
pub const MAX_ITEMS: usize = 10;

/// Extract feed items from the site document.
///
/// Returns an empty list when the document carries no `nodeById` mapping
/// (malformed input — the caller applies its own fallback). Otherwise every
/// node is run through both heuristics, the results are deduplicated by
/// title, and the list is capped at [`MAX_ITEMS`]. Node iteration order is
/// implementation-defined.
pub fn extract_projects(
    document: &SiteDocument,
    base_url: &str,
    fetched_at: DateTime<Utc>,
) -> Vec<FeedItem> {
    let Some(nodes) = &document.node_by_id else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut items = Vec::new();

    for (node_id, node) in nodes {
        // Interaction heuristic: the first action of each interaction may
        // navigate to an internal project page.
        for interaction in node.interactions() {
            let Some(action) = interaction.actions.first() else {
                continue;
            };
            let Some(path) = action.connection_url.as_deref() else {
                continue;
            };
            if !is_internal_project_path(path) {
                continue;
            }

            let name = path.trim_start_matches('/').replace('-', " ");
            if name.is_empty() || name.chars().count() >= MAX_PROJECT_NAME_LEN {
                continue;
            }
            if !seen.insert(format!("project-{}", name)) {
                continue;
            }

            items.push(FeedItem {
                title: format!("{} - New Project", capitalize(&name)),
                link: format!("{}{}", base_url, path),
                description: format!(
                    "Explore Jason Spielman's latest {} project - featuring innovative \
                     design work, UX research, and creative solutions.",
                    name
                ),
                pub_date: fetched_at,
                guid: item_guid("project", &format!("{}:{}", node_id, name)),
            });
        }

        // Text heuristic: short standalone copy mentioning project keywords
        // tends to be a project blurb.
        if let Some(text) = node.text() {
            let trimmed = text.trim();
            let len = trimmed.chars().count();
            if len > MIN_TEXT_LEN && len < MAX_TEXT_LEN && mentions_project_keyword(trimmed) {
                let prefix: String = trimmed.chars().take(20).collect();
                if seen.insert(format!("text-{}", prefix)) {
                    items.push(FeedItem {
                        title: compact_title(trimmed),
                        link: base_url.to_string(),
                        description: normalize_whitespace(trimmed),
                        pub_date: fetched_at,
                        guid: item_guid("text", &format!("{}:{}", node_id, trimmed)),
                    });
                }
            }
        }
    }

    if items.is_empty() {
        items.push(default_portfolio_item(base_url, fetched_at));
    }

    let mut titles = HashSet::new();
    items.retain(|item| titles.insert(item.title.clone()));
    items.truncate(MAX_ITEMS);
    items
}

/// The generic item emitted when the graph yields nothing project-like.
pub fn default_portfolio_item(base_url: &str, at: DateTime<Utc>) -> FeedItem {
    let title = "Jason Spielman - Design Portfolio";
    FeedItem {
        title: title.to_string(),
        link: base_url.to_string(),
        description: "Latest design work and projects from Jason Spielman. Check out the \
                      portfolio for UX design, brand identity, and digital experiences."
            .to_string(),
        pub_date: at,
        guid: item_guid("default", title),
    }
}

/// A relative path into the site, long enough to name a project.
fn is_internal_project_path(path: &str) -> bool {
    path.starts_with('/') && !path.contains("http") && path.len() > 1
}

fn mentions_project_keyword(text: &str) -> bool {
    let lower = text.to_lowercase();
    PROJECT_KEYWORDS.iter().any(|k| lower.contains(k))
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Truncate to [`MAX_TITLE_LEN`] characters with an ellipsis marker.
fn compact_title(text: &str) -> String {
    let title = if text.chars().count() > MAX_TITLE_LEN {
        let head: String = text.chars().take(MAX_TITLE_LEN - 3).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    };
    normalize_whitespace(&title)
}

fn normalize_whitespace(text: &str) -> String {
    text.replace('\n', " ").trim().to_string()
}
