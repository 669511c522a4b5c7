//! The indexed item map.
//!
//! An `ItemMap` is the flat, id-keyed view of a nested item tree. It is
//! rebuilt by the indexer whenever the source items change and is never
//! mutated by the state machine.

use std::collections::HashMap;

use crate::domain::value_objects::Expansion;
use crate::models::{ExpandedById, ItemId};

/// Group metadata, present only for group items
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupState {
    /// Direct children, in source order
    pub children_ids: Vec<ItemId>,
}

/// Position of an item inside the tree
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemState {
    /// Parent group, `None` for root items
    pub parent_id: Option<ItemId>,
    /// Nesting depth (0 = root)
    pub indentation: usize,
}

/// Everything known about one indexed item
#[derive(Debug, Clone, PartialEq)]
pub struct ItemMeta<T> {
    pub data: T,
    pub group_state: Option<GroupState>,
    pub item_state: ItemState,
}

impl<T> ItemMeta<T> {
    pub fn is_group(&self) -> bool {
        self.group_state.is_some()
    }
}

/// A row of the visible (expansion-aware) list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub id: ItemId,
    pub indentation: usize,
    pub is_group: bool,
    /// Whether this is the last visible row
    pub is_last_item: bool,
}

/// Flat id-indexed view of an item tree
#[derive(Debug, Clone)]
pub struct ItemMap<T> {
    pub(crate) items_by_id: HashMap<ItemId, ItemMeta<T>>,
    pub(crate) root_ids: Vec<ItemId>,
    /// All ids in depth-first source order
    pub(crate) order: Vec<ItemId>,
}

impl<T> Default for ItemMap<T> {
    fn default() -> Self {
        Self {
            items_by_id: HashMap::new(),
            root_ids: Vec::new(),
            order: Vec::new(),
        }
    }
}

impl<T> ItemMap<T> {
    pub fn get(&self, id: &ItemId) -> Option<&ItemMeta<T>> {
        self.items_by_id.get(id)
    }

    /// Payload of `id`, if it is still indexed
    pub fn data(&self, id: &ItemId) -> Option<&T> {
        self.items_by_id.get(id).map(|meta| &meta.data)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.items_by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn root_ids(&self) -> &[ItemId] {
        &self.root_ids
    }

    /// Every id in depth-first order, regardless of expansion
    pub fn ids(&self) -> &[ItemId] {
        &self.order
    }

    /// Ids of the rows that are currently visible.
    ///
    /// Children of collapsed groups are hidden; groups without an entry
    /// in `expanded_by_id` count as expanded.
    pub fn visible_ids(&self, expanded_by_id: &ExpandedById) -> Vec<ItemId> {
        let mut out = Vec::with_capacity(self.order.len());
        for id in &self.root_ids {
            self.collect_visible(id, expanded_by_id, &mut out);
        }
        out
    }

    fn collect_visible(&self, id: &ItemId, expanded_by_id: &ExpandedById, out: &mut Vec<ItemId>) {
        let Some(meta) = self.items_by_id.get(id) else {
            return;
        };
        out.push(id.clone());

        if let Some(group) = &meta.group_state {
            if Expansion::of(expanded_by_id, id).is_expanded() {
                for child in &group.children_ids {
                    self.collect_visible(child, expanded_by_id, out);
                }
            }
        }
    }

    /// Visible rows with their render metadata
    pub fn visible_rows(&self, expanded_by_id: &ExpandedById) -> Vec<ListRow> {
        let ids = self.visible_ids(expanded_by_id);
        let last = ids.len().saturating_sub(1);

        ids.into_iter()
            .enumerate()
            .filter_map(|(index, id)| {
                let meta = self.items_by_id.get(&id)?;
                Some(ListRow {
                    indentation: meta.item_state.indentation,
                    is_group: meta.is_group(),
                    is_last_item: index == last,
                    id,
                })
            })
            .collect()
    }

    /// Whether `id` is the last visible row
    pub fn is_last_visible(&self, id: &ItemId, expanded_by_id: &ExpandedById) -> bool {
        self.visible_ids(expanded_by_id).last() == Some(id)
    }
}
