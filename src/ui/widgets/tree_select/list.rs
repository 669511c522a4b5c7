//! Scrollable list container for the terminal picker.
//!
//! Implements `PopupHost`: focus and scroll requests coming out of the
//! popup lifecycle are recorded here and applied against the rows on the
//! next render.

use std::ops::Range;

use crate::domain::ports::PopupHost;
use crate::models::ItemId;

/// Viewport over the visible rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalList {
    /// Rows shown at once
    pub page_size: usize,
    /// Index of the first row shown
    pub offset: usize,
    /// Whether the container currently has input focus
    pub focused: bool,
    pending_scroll: Option<ItemId>,
}

impl TerminalList {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            offset: 0,
            focused: false,
            pending_scroll: None,
        }
    }

    /// Row the host was last asked to scroll to, not yet applied
    pub fn pending_scroll(&self) -> Option<&ItemId> {
        self.pending_scroll.as_ref()
    }

    /// Bring the pending scroll target and the active row into view.
    ///
    /// Ids that are not among `row_ids` are dropped silently.
    pub fn sync_viewport(&mut self, row_ids: &[ItemId], active_index: Option<usize>) {
        if let Some(target) = self.pending_scroll.take() {
            match row_ids.iter().position(|id| *id == target) {
                Some(index) => self.scroll_into_view(index),
                None => tracing::trace!(id = %target, "scroll target not visible"),
            }
        }
        if let Some(index) = active_index {
            self.scroll_into_view(index);
        }

        let max_offset = row_ids.len().saturating_sub(self.page_size);
        self.offset = self.offset.min(max_offset);
    }

    fn scroll_into_view(&mut self, index: usize) {
        if index < self.offset {
            self.offset = index;
        } else if index >= self.offset.saturating_add(self.page_size) {
            self.offset = index + 1 - self.page_size;
        }
    }

    /// Row indices currently shown
    pub fn window(&self, len: usize) -> Range<usize> {
        let start = self.offset.min(len);
        let end = self.offset.saturating_add(self.page_size).min(len);
        start..end
    }
}

impl PopupHost for TerminalList {
    fn focus_container(&mut self) {
        self.focused = true;
    }

    fn scroll_to_item(&mut self, id: &ItemId) {
        self.pending_scroll = Some(id.clone());
    }
}
