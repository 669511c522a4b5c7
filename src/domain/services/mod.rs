//! Domain Services
//!
//! Stateless functions over domain entities.

mod indexer;

pub use indexer::{index_items, GetId};
