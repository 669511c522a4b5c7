//! Popup Host Port
//!
//! The rendering layer owns the actual list container. The popup lifecycle
//! only asks it to take focus and to bring a row into view.

use crate::models::ItemId;

/// The list container inside the popup.
///
/// Implementations must tolerate ids that are not rendered.
pub trait PopupHost {
    /// Whether the container is attached. Requests to an unattached
    /// container are skipped.
    fn is_mounted(&self) -> bool {
        true
    }

    /// Move input focus to the list container
    fn focus_container(&mut self);

    /// Scroll the row for `id` into view
    fn scroll_to_item(&mut self, id: &ItemId);
}
