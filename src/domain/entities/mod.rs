//! Domain Entities

mod item_map;

pub use item_map::{GroupState, ItemMap, ItemMeta, ItemState, ListRow};
