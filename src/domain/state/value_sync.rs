//! Value synchronization: controlled / uncontrolled selection value.

use std::collections::HashSet;

use crate::domain::value_objects::Ownership;
use crate::models::{ItemId, SelectedById};

/// The selection value and its derived lookup.
///
/// The ordered value is the source of truth; `selected()` is recomputed
/// from it on every read so it can never go stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueSync {
    ownership: Ownership<Vec<ItemId>>,
}

/// Resolve the value from an optional controlled prop and an optional default.
///
/// A present prop makes the value controlled; the default is then ignored.
pub fn resolve_value(prop_value: Option<Vec<ItemId>>, default_value: Option<Vec<ItemId>>) -> ValueSync {
    ValueSync {
        ownership: Ownership::resolve(prop_value.map(dedup), default_value.map(dedup)),
    }
}

impl ValueSync {
    /// Current ordered value
    pub fn value(&self) -> &[ItemId] {
        self.ownership.read()
    }

    /// Last selected id, if any
    pub fn last(&self) -> Option<&ItemId> {
        self.value().last()
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.value().contains(id)
    }

    pub fn is_controlled(&self) -> bool {
        self.ownership.is_controlled()
    }

    /// Write the inner value. Dropped when controlled; returns whether the
    /// value changed hands.
    pub fn write(&mut self, next: Vec<ItemId>) -> bool {
        let written = self.ownership.write(dedup(next));
        if !written {
            tracing::trace!("value is controlled, inner write dropped");
        }
        written
    }

    /// Apply a new controlled prop (`None` releases control)
    pub fn sync_prop(&mut self, prop_value: Option<Vec<ItemId>>) {
        self.ownership.sync_prop(prop_value.map(dedup));
    }

    /// Lookup of every id in the value
    pub fn selected(&self) -> SelectedById {
        self.value().iter().map(|id| (id.clone(), true)).collect()
    }
}

/// Remove repeated ids, keeping first occurrences in order
fn dedup(ids: Vec<ItemId>) -> Vec<ItemId> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}
