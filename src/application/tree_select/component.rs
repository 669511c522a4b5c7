//! The tree select state machine.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::entities::ItemMap;
use crate::domain::policies::{
    toggle_membership, ClickAction, ClickDecision, ItemClickEvent, SelectionPolicy,
};
use crate::domain::ports::PopupHost;
use crate::domain::services::{index_items, GetId};
use crate::domain::state::{
    resolve_value, ListState, ListStateSeed, OpenTransition, PopupCoordinator, ValueSync,
};
use crate::domain::value_objects::Expansion;
use crate::models::{DisabledById, GroupsBehavior, ItemId, Placement, Size, TreeItem, Width};

use super::config::{
    MapItemToTitle, OnClose, OnItemClick, OnOpenChange, OnUpdate, SetActiveItemId,
    TreeSelectConfig,
};
use super::props::{ControlProps, ListProps, PopupProps};

static NEXT_INSTANCE: AtomicUsize = AtomicUsize::new(0);

fn generate_id() -> String {
    format!("ts{}", NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed))
}

struct Callbacks<T> {
    on_update: Option<OnUpdate<T>>,
    on_open_change: Option<OnOpenChange>,
    on_close: Option<OnClose>,
    on_item_click: Option<OnItemClick<T>>,
    set_active_item_id: Option<SetActiveItemId>,
    map_item_data_to_title: Option<MapItemToTitle<T>>,
}

#[derive(Debug, Clone, Copy)]
struct DisplayOptions {
    size: Size,
    width: Width,
    popup_width: Width,
    placement: Placement,
}

/// A hierarchical select: item map, list state, value and popup.
///
/// All operations are synchronous and only touch this instance's state
/// and its configured callbacks.
pub struct TreeSelect<T> {
    id: String,
    items: Vec<TreeItem<T>>,
    get_id: Option<GetId<T>>,
    item_map: ItemMap<T>,
    policy: SelectionPolicy,
    list_state: ListState,
    value: ValueSync,
    popup: PopupCoordinator,
    display: DisplayOptions,
    callbacks: Callbacks<T>,
}

impl<T: Clone> TreeSelect<T> {
    pub fn new(config: TreeSelectConfig<T>) -> Self {
        let value = resolve_value(config.value, config.default_value);
        let item_map = index_items(&config.items, config.get_id.as_ref());
        let list_state = ListState::new(ListStateSeed {
            expanded_by_id: config.expanded_by_id,
            disabled_by_id: config.disabled_by_id,
            selected_by_id: value.selected(),
            active_item_id: config.active_item_id,
        });

        let id = config.id.unwrap_or_else(generate_id);
        tracing::debug!(
            id = %id,
            items = item_map.len(),
            multiple = config.multiple,
            controlled = value.is_controlled(),
            "created tree select"
        );

        Self {
            id,
            items: config.items,
            get_id: config.get_id,
            item_map,
            policy: SelectionPolicy::new(config.multiple, config.groups_behavior),
            list_state,
            value,
            popup: PopupCoordinator::new(config.open, config.default_open),
            display: DisplayOptions {
                size: config.size,
                width: config.width,
                popup_width: config.popup_width,
                placement: config.placement,
            },
            callbacks: Callbacks {
                on_update: config.on_update,
                on_open_change: config.on_open_change,
                on_close: config.on_close,
                on_item_click: config.on_item_click,
                set_active_item_id: config.set_active_item_id,
                map_item_data_to_title: config.map_item_data_to_title,
            },
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current ordered value
    pub fn value(&self) -> &[ItemId] {
        self.value.value()
    }

    pub fn is_open(&self) -> bool {
        self.popup.is_open()
    }

    pub fn is_multiple(&self) -> bool {
        self.policy.multiple
    }

    pub fn items(&self) -> &[TreeItem<T>] {
        &self.items
    }

    pub fn item_map(&self) -> &ItemMap<T> {
        &self.item_map
    }

    /// Number of indexed items a click can select: enabled leaves, plus
    /// enabled groups when groups are not expandable.
    pub fn selectable_count(&self) -> usize {
        let groups_selectable = self.policy.groups_behavior == GroupsBehavior::None;
        self.item_map
            .ids()
            .iter()
            .filter(|id| !self.list_state.is_disabled(id))
            .filter(|id| {
                self.item_map
                    .get(id)
                    .is_some_and(|meta| groups_selectable || !meta.is_group())
            })
            .count()
    }

    pub fn list_state(&self) -> &ListState {
        &self.list_state
    }

    pub fn active_item_id(&self) -> Option<&ItemId> {
        self.list_state.active_item_id()
    }

    pub fn expansion(&self, id: &ItemId) -> Expansion {
        self.list_state.expansion(id)
    }

    /// Replace the source items and rebuild the item map.
    ///
    /// State slices keep their entries, including ids that no longer exist.
    pub fn set_items(&mut self, items: Vec<TreeItem<T>>) {
        self.item_map = index_items(&items, self.get_id.as_ref());
        self.items = items;
    }

    /// Apply a new controlled value (`None` releases control)
    pub fn set_value_prop(&mut self, value: Option<Vec<ItemId>>) {
        self.value.sync_prop(value);
        self.list_state.selected_by_id.set(self.value.selected());
    }

    /// Apply a new controlled open state (`None` releases control)
    pub fn set_open_prop(&mut self, open: Option<bool>) {
        self.popup.sync_prop(open);
    }

    /// Replace the disabled items
    pub fn set_disabled_by_id(&mut self, disabled: DisabledById) {
        self.list_state.disabled_by_id.set(disabled);
    }

    /// Build the click event for an indexed id
    pub fn click_event(&self, id: &ItemId) -> Option<ItemClickEvent<T>> {
        let meta = self.item_map.get(id)?;
        Some(ItemClickEvent {
            id: id.clone(),
            data: meta.data.clone(),
            group_state: meta.group_state.clone(),
            item_state: meta.item_state.clone(),
            is_last_item: self
                .item_map
                .is_last_visible(id, self.list_state.expanded_by_id.get()),
            disabled: self.list_state.is_disabled(id),
        })
    }

    /// Click the item with this id. Unknown ids are ignored.
    pub fn click(&mut self, id: &ItemId) -> bool {
        match self.click_event(id) {
            Some(event) => {
                self.handle_item_click(event);
                true
            }
            None => {
                tracing::debug!(id = %id, "click on unknown item ignored");
                false
            }
        }
    }

    /// Route a click to the interceptor or the default handling.
    pub fn handle_item_click(&mut self, mut event: ItemClickEvent<T>) {
        event.disabled = self.list_state.is_disabled(&event.id);

        if let Some(intercept) = self.callbacks.on_item_click.as_mut() {
            let decision = intercept(&event);
            tracing::debug!(id = %event.id, ?decision, "click interceptor answered");
            if decision == ClickDecision::Intercepted {
                return;
            }
        }

        self.default_click(&event);
    }

    fn default_click(&mut self, event: &ItemClickEvent<T>) {
        let action = self.policy.decide(event);
        tracing::debug!(id = %event.id, ?action, "click decision");

        if action == ClickAction::Ignore {
            return;
        }

        // The clicked item becomes active before anything else happens.
        self.set_active_item_id(Some(event.id.clone()));

        match action {
            ClickAction::ToggleExpansion(id) => {
                self.list_state.toggle_expanded(&id);
            }
            ClickAction::ToggleMembership(id) => {
                let next = toggle_membership(self.value.value(), &id);
                self.commit_value(next);
            }
            ClickAction::ReplaceSelection(id) => {
                self.commit_value(vec![id]);
                self.toggle_open(Some(false));
            }
            ClickAction::Ignore => {}
        }
    }

    /// Report a new value upward, then store it (a no-op when controlled)
    fn commit_value(&mut self, next: Vec<ItemId>) {
        if let Some(on_update) = self.callbacks.on_update.as_mut() {
            let items: Vec<Option<&T>> = next.iter().map(|id| self.item_map.data(id)).collect();
            on_update(&next, &items);
        }
        self.value.write(next);
        self.list_state.selected_by_id.set(self.value.selected());
    }

    /// Clear the value
    pub fn clear_value(&mut self) {
        self.commit_value(Vec::new());
    }

    /// Move the active item (through the caller's setter when configured)
    pub fn set_active_item_id(&mut self, id: Option<ItemId>) {
        apply_active(&mut self.callbacks, &mut self.list_state, id);
    }

    /// Open, close (`Some`) or flip (`None`) the popup.
    ///
    /// Callbacks fire only when the state would change. Returns whether a
    /// transition happened.
    pub fn toggle_open(&mut self, next: Option<bool>) -> bool {
        let Some(transition) = self.popup.toggle_open(next) else {
            return false;
        };

        if let Some(on_open_change) = self.callbacks.on_open_change.as_mut() {
            on_open_change(transition.is_open());
        }
        if transition == OpenTransition::Closed {
            if let Some(on_close) = self.callbacks.on_close.as_mut() {
                on_close();
            }
        }
        true
    }

    /// Dismissal from the popup host (outside click, escape)
    pub fn handle_close(&mut self) {
        self.toggle_open(Some(false));
    }

    /// Notify that layout has committed.
    ///
    /// When the popup opened since the previous call, focuses the list
    /// container, activates the last selected item and scrolls to it.
    pub fn layout_committed(&mut self, host: Option<&mut dyn PopupHost>) -> bool {
        let last = self.value.last().cloned();
        let callbacks = &mut self.callbacks;
        let list_state = &mut self.list_state;
        self.popup
            .layout_committed(last.as_ref(), host, |id| apply_active(callbacks, list_state, id))
    }

    /// Item data for each id in the value (`None` for ids not indexed)
    pub fn selected_items(&self) -> Vec<Option<&T>> {
        self.value
            .value()
            .iter()
            .map(|id| self.item_map.data(id))
            .collect()
    }

    /// Display title of an indexed item.
    ///
    /// Without a title mapper the id itself is used.
    pub fn item_title(&self, id: &ItemId) -> Option<String> {
        let data = self.item_map.data(id)?;
        Some(match &self.callbacks.map_item_data_to_title {
            Some(title) => title(data),
            None => id.to_string(),
        })
    }

    /// Titles of the selected items joined with `", "`
    pub fn selected_options_content(&self) -> String {
        self.value
            .value()
            .iter()
            .filter_map(|id| self.item_title(id))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn control_props(&self) -> ControlProps {
        ControlProps {
            id: self.id.clone(),
            control_id: format!("tree-select-{}", self.id),
            popup_id: format!("tree-select-popup-{}", self.id),
            open: self.is_open(),
            value: self.value().to_vec(),
            active_item_id: self.active_item_id().cloned(),
            size: self.display.size,
            width: self.display.width,
            selected_options_content: self.selected_options_content(),
        }
    }

    pub fn list_props(&self) -> ListProps<'_> {
        ListProps {
            id: format!("list-{}", self.id),
            rows: self.item_map.visible_rows(self.list_state.expanded_by_id.get()),
            disabled_by_id: self.list_state.disabled_by_id.get(),
            selected_by_id: self.list_state.selected_by_id.get(),
            expanded_by_id: self.list_state.expanded_by_id.get(),
            active_item_id: self.list_state.active_item_id(),
            multiple: self.policy.multiple,
            size: self.display.size,
        }
    }

    pub fn popup_props(&self) -> PopupProps {
        PopupProps {
            id: format!("tree-select-popup-{}", self.id),
            open: self.is_open(),
            placement: self.display.placement,
            width: self.display.popup_width,
        }
    }
}

fn apply_active<T>(callbacks: &mut Callbacks<T>, list_state: &mut ListState, id: Option<ItemId>) {
    match callbacks.set_active_item_id.as_mut() {
        Some(setter) => setter(id.as_ref()),
        None => list_state.active_item_id.set(id),
    }
}
