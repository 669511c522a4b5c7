//! State containers
//!
//! Each container exclusively owns its slices; other components change them
//! only through the setters exposed here.

mod list_state;
mod popup;
mod slot;
mod value_sync;

pub use list_state::{ListState, ListStateSeed};
pub use popup::{OpenTransition, PopupCoordinator};
pub use slot::StateSlot;
pub use value_sync::{resolve_value, ValueSync};
