//! Domain Policies
//!
//! Business rules that decide what a user interaction means.

mod selection_policy;

pub use selection_policy::{
    toggle_membership, ClickAction, ClickDecision, ItemClickEvent, SelectionPolicy,
};
