//! The four list state slices.

use crate::domain::value_objects::Expansion;
use crate::models::{DisabledById, ExpandedById, ItemId, SelectedById};

use super::slot::StateSlot;

/// Initial values for a [`ListState`].
///
/// `selected_by_id` comes from the value synchronization unit, not from
/// the caller: selection is owned by the value.
#[derive(Debug, Clone, Default)]
pub struct ListStateSeed {
    pub expanded_by_id: Option<ExpandedById>,
    pub disabled_by_id: Option<DisabledById>,
    pub selected_by_id: SelectedById,
    pub active_item_id: Option<ItemId>,
}

/// Expanded, disabled, selected and active-item state of one list.
///
/// Containers are tolerant: ids are stored whether or not they exist in
/// the current item map.
#[derive(Debug, Clone, Default)]
pub struct ListState {
    pub expanded_by_id: StateSlot<ExpandedById>,
    pub disabled_by_id: StateSlot<DisabledById>,
    pub selected_by_id: StateSlot<SelectedById>,
    pub active_item_id: StateSlot<Option<ItemId>>,
}

impl ListState {
    pub fn new(seed: ListStateSeed) -> Self {
        Self {
            expanded_by_id: StateSlot::new(seed.expanded_by_id.unwrap_or_default()),
            disabled_by_id: StateSlot::new(seed.disabled_by_id.unwrap_or_default()),
            selected_by_id: StateSlot::new(seed.selected_by_id),
            active_item_id: StateSlot::new(seed.active_item_id),
        }
    }

    pub fn is_disabled(&self, id: &ItemId) -> bool {
        self.disabled_by_id.get().get(id).copied().unwrap_or(false)
    }

    pub fn is_selected(&self, id: &ItemId) -> bool {
        self.selected_by_id.get().get(id).copied().unwrap_or(false)
    }

    pub fn expansion(&self, id: &ItemId) -> Expansion {
        Expansion::of(self.expanded_by_id.get(), id)
    }

    pub fn active_item_id(&self) -> Option<&ItemId> {
        self.active_item_id.get().as_ref()
    }

    /// Toggle the expansion of `id` and return its new state
    pub fn toggle_expanded(&mut self, id: &ItemId) -> Expansion {
        let next = self.expansion(id).toggled();
        self.expanded_by_id.update(|prev| {
            let mut expanded = prev.clone();
            match next.as_entry() {
                Some(flag) => {
                    expanded.insert(id.clone(), flag);
                }
                None => {
                    expanded.remove(id);
                }
            }
            expanded
        });
        tracing::trace!(id = %id, state = ?next, "toggled expansion");
        next
    }
}
