//! Infrastructure Layer
//!
//! File-backed sources for the picker. This layer handles all I/O.

pub mod items;

pub use items::{entry_id, entry_title, load_items, parse_items, Entry, ItemFormat, LoadedItems};
