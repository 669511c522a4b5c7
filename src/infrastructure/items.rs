//! Item file repository
//!
//! Reads a tree of items from TOML (`[[items]]`) or JSON (`{"items": [...]}`)
//! and converts it into `TreeItem<Entry>` plus the disabled seed.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{TreeSelectError, TreeSelectResult};
use crate::models::{DisabledById, ItemId, TreeItem};

/// Payload carried by items loaded from a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub id: ItemId,
    pub title: String,
}

/// Id selector for file entries
pub fn entry_id(entry: &Entry) -> ItemId {
    entry.id.clone()
}

/// Title mapper for file entries
pub fn entry_title(entry: &Entry) -> String {
    entry.title.clone()
}

/// Supported item file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemFormat {
    Toml,
    Json,
}

impl ItemFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> TreeSelectResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_lowercase();
        match extension.as_str() {
            "toml" => Ok(ItemFormat::Toml),
            "json" => Ok(ItemFormat::Json),
            _ => Err(TreeSelectError::UnsupportedFormat {
                file: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// Items read from a file, ready to seed a `TreeSelect`
#[derive(Debug, Clone, Default)]
pub struct LoadedItems {
    pub items: Vec<TreeItem<Entry>>,
    pub disabled_by_id: DisabledById,
}

/// An id as written in a file: string or integer
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl From<RawId> for ItemId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(id) => ItemId::from(id),
            RawId::Signed(id) => ItemId::from(id),
            RawId::Unsigned(id) => ItemId::from(id),
        }
    }
}

/// On-disk representation of one item
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileEntry {
    #[serde(default)]
    id: Option<RawId>,
    title: String,
    #[serde(default)]
    disabled: bool,
    #[serde(default)]
    children: Option<Vec<FileEntry>>,
}

/// On-disk representation of the whole file
#[derive(Debug, Clone, Deserialize)]
struct ItemFile {
    #[serde(default)]
    items: Vec<FileEntry>,
}

/// Load items from a `.toml` or `.json` file
pub fn load_items(path: &Path) -> TreeSelectResult<LoadedItems> {
    let format = ItemFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    let loaded = parse_items(&content, format, path)?;
    tracing::debug!(
        path = %path.display(),
        roots = loaded.items.len(),
        disabled = loaded.disabled_by_id.len(),
        "loaded item file"
    );
    Ok(loaded)
}

/// Parse item file content. `path` is only used for error messages.
pub fn parse_items(content: &str, format: ItemFormat, path: &Path) -> TreeSelectResult<LoadedItems> {
    let invalid = |message: String| TreeSelectError::InvalidItems {
        file: path.to_path_buf(),
        message,
    };

    let file: ItemFile = match format {
        ItemFormat::Toml => toml::from_str(content).map_err(|e| invalid(e.to_string()))?,
        ItemFormat::Json => serde_json::from_str(content).map_err(|e| invalid(e.to_string()))?,
    };

    let mut disabled_by_id = DisabledById::new();
    let mut seen = HashSet::new();
    let items = convert_level(file.items, None, &mut disabled_by_id, &mut seen)
        .map_err(|id| invalid(format!("duplicate item id '{id}'")))?;
    Ok(LoadedItems {
        items,
        disabled_by_id,
    })
}

/// Entries without an explicit id get their positional path ("0", "0-1").
///
/// Fails with the offending id when two entries resolve to the same id,
/// whether explicit or positional.
fn convert_level(
    entries: Vec<FileEntry>,
    parent_path: Option<&str>,
    disabled_by_id: &mut DisabledById,
    seen: &mut HashSet<ItemId>,
) -> Result<Vec<TreeItem<Entry>>, ItemId> {
    let mut items = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let path = match parent_path {
            Some(parent) => format!("{parent}-{index}"),
            None => index.to_string(),
        };
        let id = entry
            .id
            .map(ItemId::from)
            .unwrap_or_else(|| ItemId::new(path.as_str()));
        if !seen.insert(id.clone()) {
            return Err(id);
        }
        if entry.disabled {
            disabled_by_id.insert(id.clone(), true);
        }

        let data = Entry {
            id,
            title: entry.title,
        };
        items.push(match entry.children {
            Some(children) => TreeItem::group(
                data,
                convert_level(children, Some(&path), disabled_by_id, seen)?,
            ),
            None => TreeItem::leaf(data),
        });
    }
    Ok(items)
}
