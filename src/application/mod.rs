//! Application Layer
//!
//! Wires the domain state containers into a usable component.
//!
//! ## Structure
//!
//! - `tree_select/` - The `TreeSelect` orchestrator, its config and render props

pub mod tree_select;

pub use tree_select::{
    ControlProps, ListProps, PopupProps, TreeSelect, TreeSelectConfig,
};
