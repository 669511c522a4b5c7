//! Expansion state of a group item.

use crate::models::{ExpandedById, ItemId};

/// Expansion state of a single group.
///
/// Groups are expanded by default: an id without an entry in the
/// expanded map is `Unset`, which renders as expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Expansion {
    /// Explicitly expanded
    Expanded,
    /// Explicitly collapsed
    Collapsed,
    /// No entry yet (behaves as expanded)
    #[default]
    Unset,
}

impl Expansion {
    /// Read the state of `id` from an expanded-by-id map
    pub fn of(expanded_by_id: &ExpandedById, id: &ItemId) -> Self {
        match expanded_by_id.get(id) {
            Some(true) => Expansion::Expanded,
            Some(false) => Expansion::Collapsed,
            None => Expansion::Unset,
        }
    }

    /// Whether children of this group are visible
    pub fn is_expanded(self) -> bool {
        !matches!(self, Expansion::Collapsed)
    }

    /// The state after one toggle.
    ///
    /// | before    | after     |
    /// |-----------|-----------|
    /// | Unset     | Collapsed |
    /// | Expanded  | Collapsed |
    /// | Collapsed | Expanded  |
    pub fn toggled(self) -> Self {
        match self {
            Expansion::Unset | Expansion::Expanded => Expansion::Collapsed,
            Expansion::Collapsed => Expansion::Expanded,
        }
    }

    /// The map entry representing this state (`None` removes the entry)
    pub fn as_entry(self) -> Option<bool> {
        match self {
            Expansion::Expanded => Some(true),
            Expansion::Collapsed => Some(false),
            Expansion::Unset => None,
        }
    }
}
