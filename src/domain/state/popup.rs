//! Popup lifecycle: open/close state and the focus restore on open.

use crate::domain::ports::PopupHost;
use crate::domain::value_objects::Ownership;
use crate::models::ItemId;

/// An edge of the open state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenTransition {
    Opened,
    Closed,
}

impl OpenTransition {
    /// The open state after this transition
    pub fn is_open(self) -> bool {
        matches!(self, OpenTransition::Opened)
    }
}

/// Open/closed state of the popup, controlled or uncontrolled.
///
/// The focus restore runs after layout, once per closed→open edge. The
/// edge is detected by comparing the open state seen at the previous
/// layout with the current one, so nothing but the open state can
/// trigger it.
#[derive(Debug, Clone)]
pub struct PopupCoordinator {
    open: Ownership<bool>,
    /// Open state observed at the last layout commit
    observed_open: bool,
}

impl PopupCoordinator {
    pub fn new(open_prop: Option<bool>, default_open: Option<bool>) -> Self {
        Self {
            open: Ownership::resolve(open_prop, default_open),
            observed_open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        *self.open.read()
    }

    pub fn is_controlled(&self) -> bool {
        self.open.is_controlled()
    }

    /// Request a new open state (`None` flips it).
    ///
    /// Returns the edge when the request differs from the current state,
    /// `None` for a no-op. When controlled the state itself is unchanged and
    /// the edge is only a proposal for the owner.
    pub fn toggle_open(&mut self, next: Option<bool>) -> Option<OpenTransition> {
        let current = self.is_open();
        let target = next.unwrap_or(!current);
        if target == current {
            return None;
        }

        self.open.write(target);
        let transition = if target {
            OpenTransition::Opened
        } else {
            OpenTransition::Closed
        };
        tracing::debug!(?transition, controlled = self.is_controlled(), "popup transition");
        Some(transition)
    }

    /// Apply a new controlled `open` prop (`None` releases control)
    pub fn sync_prop(&mut self, open_prop: Option<bool>) {
        self.open.sync_prop(open_prop);
    }

    /// Consume the closed→open edge, if one happened since the last call
    pub fn take_open_edge(&mut self) -> bool {
        let current = self.is_open();
        let opened = current && !self.observed_open;
        self.observed_open = current;
        opened
    }

    /// Run the post-layout focus restore.
    ///
    /// On a closed→open edge: focus the container, activate the last
    /// selected id (or clear the active item), then scroll that id into
    /// view. A missing or unmounted host skips focus and scroll but the
    /// active item is still restored. Returns whether the restore ran.
    pub fn layout_committed(
        &mut self,
        last_selected: Option<&ItemId>,
        host: Option<&mut dyn PopupHost>,
        set_active: impl FnOnce(Option<ItemId>),
    ) -> bool {
        if !self.take_open_edge() {
            return false;
        }

        let mut host = host.filter(|h| h.is_mounted());
        if host.is_none() {
            tracing::debug!("popup container not mounted, skipping focus and scroll");
        }

        if let Some(h) = host.as_mut() {
            h.focus_container();
        }

        set_active(last_selected.cloned());

        if let (Some(h), Some(id)) = (host.as_mut(), last_selected) {
            h.scroll_to_item(id);
        }

        true
    }
}
