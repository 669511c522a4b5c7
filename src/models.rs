//! Core data models for treeselect
//!
//! Defines the fundamental data structures shared by every layer:
//! - `ItemId`: opaque identifier keying every state slice
//! - `TreeItem`: a node of the caller's (possibly nested) item tree
//! - Supporting enums: `GroupsBehavior`, `Size`, `Width`, `Placement`

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Identifier of a list item.
///
/// Item ids may come from strings or numbers; numbers are kept in their
/// decimal form so `ItemId::from(7u64) == ItemId::from("7")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&String> for ItemId {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<usize> for ItemId {
    fn from(value: usize) -> Self {
        Self(value.to_string())
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

/// Expanded state keyed by id. Absent entries mean "expanded".
pub type ExpandedById = HashMap<ItemId, bool>;
/// Disabled state keyed by id.
pub type DisabledById = HashMap<ItemId, bool>;
/// Selection lookup derived from the value.
pub type SelectedById = HashMap<ItemId, bool>;

/// A node in the caller's item tree
///
/// `children: Some(_)` marks a group, even when the vector is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeItem<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeItem<T>>>,
}

impl<T> TreeItem<T> {
    /// Create a leaf item
    pub fn leaf(data: T) -> Self {
        Self {
            data,
            children: None,
        }
    }

    /// Create a group item with the given children
    pub fn group(data: T, children: Vec<TreeItem<T>>) -> Self {
        Self {
            data,
            children: Some(children),
        }
    }

    /// Check if this item is a group
    pub fn is_group(&self) -> bool {
        self.children.is_some()
    }
}

/// What clicking a group does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GroupsBehavior {
    /// Clicking a group toggles its expansion
    #[default]
    Expandable,
    /// Groups are selected like leaves
    None,
}

impl std::str::FromStr for GroupsBehavior {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "expandable" => Ok(Self::Expandable),
            "none" => Ok(Self::None),
            other => Err(format!(
                "unknown groups behavior '{}' (expected 'expandable' or 'none')",
                other
            )),
        }
    }
}

/// Control size passed through to the rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    S,
    #[default]
    M,
    L,
    Xl,
}

/// Width of the control or popup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Width {
    /// Sized by content
    #[default]
    Auto,
    /// Stretch to the container
    Max,
    /// Fixed number of columns
    Fixed(u16),
}

/// Popup placement relative to the control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    #[default]
    BottomStart,
    BottomEnd,
    TopStart,
    TopEnd,
}
