//! Selection Policy
//!
//! Decides what a click on a list item means: expand/collapse a group,
//! toggle membership in a multi-select value, or replace a single-select
//! value. Pure: it only inspects the click and returns an action.

use crate::domain::entities::{GroupState, ItemState};
use crate::models::{GroupsBehavior, ItemId};

/// A click on a list item, as reported by the rendering layer
#[derive(Debug, Clone, PartialEq)]
pub struct ItemClickEvent<T> {
    pub id: ItemId,
    pub data: T,
    pub group_state: Option<GroupState>,
    pub item_state: ItemState,
    pub is_last_item: bool,
    /// Whether the item is disabled in the current list state
    pub disabled: bool,
}

impl<T> ItemClickEvent<T> {
    pub fn is_group(&self) -> bool {
        self.group_state.is_some()
    }
}

/// Answer of a caller-supplied click interceptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickDecision {
    /// The caller handled the click; nothing else happens
    Intercepted,
    /// Run the default click handling
    UseDefault,
}

/// What the default click handling should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Disabled item: change nothing
    Ignore,
    /// Flip the expansion of a group
    ToggleExpansion(ItemId),
    /// Add or remove the id from a multi-select value
    ToggleMembership(ItemId),
    /// Make the id the only selected one and close the popup
    ReplaceSelection(ItemId),
}

/// Click decision tree for one select instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionPolicy {
    pub multiple: bool,
    pub groups_behavior: GroupsBehavior,
}

impl SelectionPolicy {
    pub fn new(multiple: bool, groups_behavior: GroupsBehavior) -> Self {
        Self {
            multiple,
            groups_behavior,
        }
    }

    /// Decide the default action for a click
    pub fn decide<T>(&self, event: &ItemClickEvent<T>) -> ClickAction {
        if event.disabled {
            return ClickAction::Ignore;
        }

        let id = event.id.clone();
        if event.is_group() && self.groups_behavior == GroupsBehavior::Expandable {
            ClickAction::ToggleExpansion(id)
        } else if self.multiple {
            ClickAction::ToggleMembership(id)
        } else {
            ClickAction::ReplaceSelection(id)
        }
    }
}

/// `value` with `id` removed if present, appended otherwise
pub fn toggle_membership(value: &[ItemId], id: &ItemId) -> Vec<ItemId> {
    if value.contains(id) {
        value.iter().filter(|v| *v != id).cloned().collect()
    } else {
        let mut next = value.to_vec();
        next.push(id.clone());
        next
    }
}
