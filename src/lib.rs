//! treeselect - headless tree-select state machine
//!
//! treeselect turns a nested item tree into the state of a hierarchical
//! select control: which groups are expanded, which items are selected,
//! which row is active and whether the popup is open. Any of those can be
//! owned by the caller (controlled) or by the component (uncontrolled).
//! A crossterm picker in `ui` drives the same state machine from a terminal.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod ui;

// Re-exports for convenience
pub use application::{ControlProps, ListProps, PopupProps, TreeSelect, TreeSelectConfig};
pub use domain::entities::{GroupState, ItemMap, ItemState, ListRow};
pub use domain::policies::{ClickAction, ClickDecision, ItemClickEvent};
pub use domain::ports::PopupHost;
pub use domain::services::{index_items, GetId};
pub use domain::value_objects::Expansion;
pub use error::{TreeSelectError, TreeSelectResult};
pub use models::{
    DisabledById, ExpandedById, GroupsBehavior, ItemId, Placement, SelectedById, Size, TreeItem,
    Width,
};
