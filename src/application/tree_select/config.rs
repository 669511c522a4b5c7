//! Tree Select Config
//!
//! Construction options for a `TreeSelect`, including the callbacks it
//! reports through.

use crate::domain::policies::{ClickDecision, ItemClickEvent};
use crate::domain::services::GetId;
use crate::models::{
    DisabledById, ExpandedById, GroupsBehavior, ItemId, Placement, Size, TreeItem, Width,
};

/// Called with the proposed value and the item data for each id
/// (`None` where the id is no longer indexed)
pub type OnUpdate<T> = Box<dyn FnMut(&[ItemId], &[Option<&T>])>;
/// Called on every open/close edge with the new open state
pub type OnOpenChange = Box<dyn FnMut(bool)>;
/// Called on every open→closed edge
pub type OnClose = Box<dyn FnMut()>;
/// Replaces the default click handling unless it answers `UseDefault`
pub type OnItemClick<T> = Box<dyn FnMut(&ItemClickEvent<T>) -> ClickDecision>;
/// Caller-owned active item setter, used instead of the internal one
pub type SetActiveItemId = Box<dyn FnMut(Option<&ItemId>)>;
/// Title of an item, used for the control's summary text
pub type MapItemToTitle<T> = Box<dyn Fn(&T) -> String>;

/// Options for creating a `TreeSelect`
pub struct TreeSelectConfig<T> {
    /// Source item tree
    pub items: Vec<TreeItem<T>>,
    /// Id extraction; positional ids when absent
    pub get_id: Option<GetId<T>>,
    /// Controlled value
    pub value: Option<Vec<ItemId>>,
    /// Initial value when uncontrolled
    pub default_value: Option<Vec<ItemId>>,
    /// Multi-select mode
    pub multiple: bool,
    /// Initial expanded state
    pub expanded_by_id: Option<ExpandedById>,
    /// Disabled items
    pub disabled_by_id: Option<DisabledById>,
    /// Initial active item
    pub active_item_id: Option<ItemId>,
    /// Controlled open state
    pub open: Option<bool>,
    /// Initial open state when uncontrolled
    pub default_open: Option<bool>,
    /// What clicking a group does
    pub groups_behavior: GroupsBehavior,
    /// Instance id; generated when absent
    pub id: Option<String>,
    pub size: Size,
    pub width: Width,
    pub popup_width: Width,
    pub placement: Placement,
    pub map_item_data_to_title: Option<MapItemToTitle<T>>,
    pub on_update: Option<OnUpdate<T>>,
    pub on_open_change: Option<OnOpenChange>,
    pub on_close: Option<OnClose>,
    pub on_item_click: Option<OnItemClick<T>>,
    pub set_active_item_id: Option<SetActiveItemId>,
}

impl<T> TreeSelectConfig<T> {
    pub fn new(items: Vec<TreeItem<T>>) -> Self {
        Self {
            items,
            get_id: None,
            value: None,
            default_value: None,
            multiple: false,
            expanded_by_id: None,
            disabled_by_id: None,
            active_item_id: None,
            open: None,
            default_open: None,
            groups_behavior: GroupsBehavior::default(),
            id: None,
            size: Size::default(),
            width: Width::default(),
            popup_width: Width::default(),
            placement: Placement::default(),
            map_item_data_to_title: None,
            on_update: None,
            on_open_change: None,
            on_close: None,
            on_item_click: None,
            set_active_item_id: None,
        }
    }

    pub fn with_get_id(mut self, get_id: impl Fn(&T) -> ItemId + 'static) -> Self {
        self.get_id = Some(Box::new(get_id));
        self
    }

    pub fn with_value(mut self, value: Vec<ItemId>) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_default_value(mut self, value: Vec<ItemId>) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn with_expanded_by_id(mut self, expanded: ExpandedById) -> Self {
        self.expanded_by_id = Some(expanded);
        self
    }

    pub fn with_disabled_by_id(mut self, disabled: DisabledById) -> Self {
        self.disabled_by_id = Some(disabled);
        self
    }

    pub fn with_active_item_id(mut self, id: ItemId) -> Self {
        self.active_item_id = Some(id);
        self
    }

    pub fn with_open(mut self, open: bool) -> Self {
        self.open = Some(open);
        self
    }

    pub fn with_default_open(mut self, open: bool) -> Self {
        self.default_open = Some(open);
        self
    }

    pub fn with_groups_behavior(mut self, behavior: GroupsBehavior) -> Self {
        self.groups_behavior = behavior;
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn with_width(mut self, width: Width) -> Self {
        self.width = width;
        self
    }

    pub fn with_popup_width(mut self, width: Width) -> Self {
        self.popup_width = width;
        self
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_title(mut self, title: impl Fn(&T) -> String + 'static) -> Self {
        self.map_item_data_to_title = Some(Box::new(title));
        self
    }

    pub fn on_update(mut self, callback: impl FnMut(&[ItemId], &[Option<&T>]) + 'static) -> Self {
        self.on_update = Some(Box::new(callback));
        self
    }

    pub fn on_open_change(mut self, callback: impl FnMut(bool) + 'static) -> Self {
        self.on_open_change = Some(Box::new(callback));
        self
    }

    pub fn on_close(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    pub fn on_item_click(
        mut self,
        callback: impl FnMut(&ItemClickEvent<T>) -> ClickDecision + 'static,
    ) -> Self {
        self.on_item_click = Some(Box::new(callback));
        self
    }

    pub fn with_set_active_item_id(
        mut self,
        setter: impl FnMut(Option<&ItemId>) + 'static,
    ) -> Self {
        self.set_active_item_id = Some(Box::new(setter));
        self
    }
}
