//! Tree Select Widget
//!
//! Terminal front end for `TreeSelect`: a scrollable list host, string
//! rendering and a crossterm input loop.
//!
//! # Module Structure
//!
//! - `list` - `TerminalList`, the `PopupHost` viewport
//! - `render` - Row, control and status rendering
//! - `input` - Keyboard mapping and the interactive loop

mod input;
mod list;
mod render;

pub use input::{apply_action, key_to_action, move_active, run_interactive, Flow, PickerAction};
pub use list::TerminalList;
pub use render::{
    render_control, render_help_bar, render_list, render_picker, render_row, render_status_bar,
    truncate_to_width,
};
