//! Item indexer.
//!
//! Turns a nested item tree into an [`ItemMap`]. Pure and deterministic:
//! the same items and id function always produce the same map.

use std::collections::HashMap;

use crate::domain::entities::{GroupState, ItemMap, ItemMeta, ItemState};
use crate::models::{ItemId, TreeItem};

/// Extracts an id from an item payload
pub type GetId<T> = Box<dyn Fn(&T) -> ItemId>;

/// Index a nested item tree.
///
/// With `get_id`, ids come from the payloads. Without it, ids are
/// positional: root items are `"0"`, `"1"`, ... and children append their
/// index to the parent id (`"0-1"`).
///
/// When two items resolve to the same id, the first one in depth-first
/// order is kept and the duplicate (with its subtree) is skipped.
pub fn index_items<T: Clone>(items: &[TreeItem<T>], get_id: Option<&GetId<T>>) -> ItemMap<T> {
    let mut map = ItemMap {
        items_by_id: HashMap::new(),
        root_ids: Vec::new(),
        order: Vec::new(),
    };

    for (index, item) in items.iter().enumerate() {
        if let Some(id) = index_item(&mut map, item, index, None, 0, get_id) {
            map.root_ids.push(id);
        }
    }

    tracing::trace!(items = map.order.len(), "indexed item tree");
    map
}

fn index_item<T: Clone>(
    map: &mut ItemMap<T>,
    item: &TreeItem<T>,
    index: usize,
    parent_id: Option<&ItemId>,
    indentation: usize,
    get_id: Option<&GetId<T>>,
) -> Option<ItemId> {
    let id = match get_id {
        Some(get_id) => get_id(&item.data),
        None => positional_id(parent_id, index),
    };

    if map.items_by_id.contains_key(&id) {
        tracing::warn!(id = %id, "duplicate item id, skipping item and its children");
        return None;
    }

    // Reserve the slot before recursing so children follow their parent in `order`.
    map.order.push(id.clone());
    map.items_by_id.insert(
        id.clone(),
        ItemMeta {
            data: item.data.clone(),
            group_state: None,
            item_state: ItemState {
                parent_id: parent_id.cloned(),
                indentation,
            },
        },
    );

    if let Some(children) = &item.children {
        let mut children_ids = Vec::with_capacity(children.len());
        for (child_index, child) in children.iter().enumerate() {
            if let Some(child_id) =
                index_item(map, child, child_index, Some(&id), indentation + 1, get_id)
            {
                children_ids.push(child_id);
            }
        }
        if let Some(meta) = map.items_by_id.get_mut(&id) {
            meta.group_state = Some(GroupState { children_ids });
        }
    }

    Some(id)
}

fn positional_id(parent_id: Option<&ItemId>, index: usize) -> ItemId {
    match parent_id {
        Some(parent) => ItemId::new(format!("{}-{}", parent, index)),
        None => ItemId::from(index),
    }
}
