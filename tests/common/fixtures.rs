//! Test fixtures - reusable item trees and item files.

use treeselect::{ItemId, TreeItem, TreeSelectConfig};

/// Payload used by the library-level scenarios
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub key: &'static str,
    pub title: &'static str,
}

pub fn node(key: &'static str, title: &'static str) -> Node {
    Node { key, title }
}

pub fn id(s: &str) -> ItemId {
    ItemId::from(s)
}

pub fn ids(raw: &[&str]) -> Vec<ItemId> {
    raw.iter().map(|s| ItemId::from(*s)).collect()
}

/// `a` (group: a1, a2), `b`
pub fn sample_tree() -> Vec<TreeItem<Node>> {
    vec![
        TreeItem::group(
            node("a", "Group A"),
            vec![
                TreeItem::leaf(node("a1", "First")),
                TreeItem::leaf(node("a2", "Second")),
            ],
        ),
        TreeItem::leaf(node("b", "Bee")),
    ]
}

/// Config over `sample_tree` keyed and titled by the payload
pub fn sample_config() -> TreeSelectConfig<Node> {
    TreeSelectConfig::new(sample_tree())
        .with_get_id(|n: &Node| ItemId::from(n.key))
        .with_title(|n: &Node| n.title.to_string())
}

/// Item file with a group, a disabled leaf and a positional id
pub const FRUITS_TOML: &str = r#"
[[items]]
id = "fruits"
title = "Fruits"

[[items.children]]
id = "apple"
title = "Apple"

[[items.children]]
id = "banana"
title = "Banana"
disabled = true

[[items]]
title = "Nuts"
"#;

/// Same tree as `FRUITS_TOML` in JSON
pub const FRUITS_JSON: &str = r#"{
  "items": [
    {
      "id": "fruits",
      "title": "Fruits",
      "children": [
        { "id": "apple", "title": "Apple" },
        { "id": "banana", "title": "Banana", "disabled": true }
      ]
    },
    { "title": "Nuts" }
  ]
}"#;
