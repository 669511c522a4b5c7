//! Render-facing props
//!
//! Plain snapshots of the component state handed to the rendering layer
//! and the popup host. Renderers treat them as opaque inputs.

use crate::domain::entities::ListRow;
use crate::models::{DisabledById, ExpandedById, ItemId, Placement, SelectedById, Size, Width};

/// Inputs for rendering the trigger control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlProps {
    pub id: String,
    /// `tree-select-<id>`
    pub control_id: String,
    /// `tree-select-popup-<id>`
    pub popup_id: String,
    pub open: bool,
    pub value: Vec<ItemId>,
    pub active_item_id: Option<ItemId>,
    pub size: Size,
    pub width: Width,
    /// Titles of the selected items, comma separated
    pub selected_options_content: String,
}

/// Inputs for rendering the list body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListProps<'a> {
    /// `list-<id>`
    pub id: String,
    /// Visible rows in display order
    pub rows: Vec<ListRow>,
    pub disabled_by_id: &'a DisabledById,
    pub selected_by_id: &'a SelectedById,
    pub expanded_by_id: &'a ExpandedById,
    pub active_item_id: Option<&'a ItemId>,
    pub multiple: bool,
    pub size: Size,
}

impl ListProps<'_> {
    pub fn is_disabled(&self, id: &ItemId) -> bool {
        self.disabled_by_id.get(id).copied().unwrap_or(false)
    }

    pub fn is_selected(&self, id: &ItemId) -> bool {
        self.selected_by_id.get(id).copied().unwrap_or(false)
    }

    pub fn is_active(&self, id: &ItemId) -> bool {
        self.active_item_id == Some(id)
    }

    /// Index of the active row, if it is visible
    pub fn active_row_index(&self) -> Option<usize> {
        let active = self.active_item_id?;
        self.rows.iter().position(|row| &row.id == active)
    }
}

/// Inputs for the popup host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupProps {
    /// `tree-select-popup-<id>`
    pub id: String,
    pub open: bool,
    pub placement: Placement,
    pub width: Width,
}
