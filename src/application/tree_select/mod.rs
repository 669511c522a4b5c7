//! Tree Select Module
//!
//! Orchestrates the item indexer, list state, value synchronization,
//! selection policy and popup lifecycle behind one component.
//!
//! ## Structure
//!
//! - `config` - Construction options and callbacks (`TreeSelectConfig`)
//! - `props` - Render-facing prop bundles (`ControlProps`, `ListProps`, `PopupProps`)
//! - `component` - The state machine itself (`TreeSelect`)
//!
//! ## Usage
//!
//! ```ignore
//! use treeselect::application::{TreeSelect, TreeSelectConfig};
//!
//! let mut select = TreeSelect::new(
//!     TreeSelectConfig::new(items)
//!         .with_get_id(|entry: &Entry| ItemId::from(entry.key.as_str()))
//!         .with_multiple(true)
//!         .on_update(|ids, _items| println!("{:?}", ids)),
//! );
//! select.toggle_open(Some(true));
//! select.click(&ItemId::from("a1"));
//! ```

mod component;
mod config;
mod props;

pub use component::TreeSelect;
pub use config::{
    MapItemToTitle, OnClose, OnItemClick, OnOpenChange, OnUpdate, SetActiveItemId,
    TreeSelectConfig,
};
pub use props::{ControlProps, ListProps, PopupProps};
