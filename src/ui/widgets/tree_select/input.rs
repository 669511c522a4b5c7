//! Keyboard input handling and interactive loop.
//!
//! Keys map to picker actions; actions drive the `TreeSelect` through its
//! public operations only, so the loop behaves like any other host.

use std::io::Write;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::application::TreeSelect;
use crate::error::{TreeSelectError, TreeSelectResult};
use crate::models::ItemId;
use crate::ui::theme::IconSet;

use super::list::TerminalList;
use super::render::render_picker;

/// Picker action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    /// Move the active row up
    Up,
    /// Move the active row down
    Down,
    /// Click the active row
    Click,
    /// Clear the value
    Clear,
    /// Dismiss the popup, keeping the value
    Close,
    /// Leave without a result
    Abort,
}

/// What the loop does after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Done,
    Aborted,
}

/// Convert a keyboard event to a PickerAction
pub fn key_to_action(key: KeyEvent) -> Option<PickerAction> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(PickerAction::Abort)
        }
        KeyCode::Up | KeyCode::Char('k') => Some(PickerAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(PickerAction::Down),
        KeyCode::Enter | KeyCode::Char(' ') => Some(PickerAction::Click),
        KeyCode::Char('c') => Some(PickerAction::Clear),
        KeyCode::Char('q') | KeyCode::Esc => Some(PickerAction::Close),
        _ => None,
    }
}

/// Move the active item by `delta` visible rows, clamped to the list.
///
/// Without an active row, moving down starts at the top and moving up
/// at the bottom.
pub fn move_active<T: Clone>(select: &mut TreeSelect<T>, delta: isize) {
    let ids: Vec<ItemId> = select
        .list_props()
        .rows
        .into_iter()
        .map(|row| row.id)
        .collect();
    if ids.is_empty() {
        return;
    }

    let last = ids.len() - 1;
    let current = select
        .active_item_id()
        .and_then(|active| ids.iter().position(|id| id == active));
    let next = match current {
        Some(index) => index.saturating_add_signed(delta).min(last),
        None if delta < 0 => last,
        None => 0,
    };
    select.set_active_item_id(Some(ids[next].clone()));
}

/// Apply one action to the picker
pub fn apply_action<T: Clone>(select: &mut TreeSelect<T>, action: PickerAction) -> Flow {
    match action {
        PickerAction::Up => move_active(select, -1),
        PickerAction::Down => move_active(select, 1),
        PickerAction::Click => {
            if let Some(id) = select.active_item_id().cloned() {
                select.click(&id);
            }
        }
        PickerAction::Clear => select.clear_value(),
        PickerAction::Close => select.handle_close(),
        PickerAction::Abort => return Flow::Aborted,
    }

    if select.is_open() {
        Flow::Continue
    } else {
        Flow::Done
    }
}

/// Run the picker interactively until the popup closes.
///
/// Returns `Aborted` when the user leaves with Ctrl+C. The terminal is
/// restored on every exit path.
pub fn run_interactive<T: Clone>(
    select: &mut TreeSelect<T>,
    list: &mut TerminalList,
    icons: &IconSet,
    width: usize,
) -> TreeSelectResult<()> {
    use crossterm::{cursor, execute, terminal};

    terminal::enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, cursor::Hide)?;

    select.toggle_open(Some(true));
    let result = event_loop(select, list, icons, width, &mut stdout);

    // Restore terminal
    execute!(
        stdout,
        cursor::Show,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    terminal::disable_raw_mode()?;

    result
}

fn event_loop<T: Clone>(
    select: &mut TreeSelect<T>,
    list: &mut TerminalList,
    icons: &IconSet,
    width: usize,
    stdout: &mut std::io::Stdout,
) -> TreeSelectResult<()> {
    use crossterm::{
        cursor,
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{self, ClearType},
    };

    loop {
        select.layout_committed(Some(&mut *list));
        {
            let props = select.list_props();
            let row_ids: Vec<ItemId> = props.rows.iter().map(|row| row.id.clone()).collect();
            list.sync_viewport(&row_ids, props.active_row_index());
        }

        execute!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        for line in render_picker(select, list, icons, width).lines() {
            write!(stdout, "{}\r\n", line)?;
        }
        stdout.flush()?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(action) = key_to_action(key) else {
            continue;
        };

        match apply_action(select, action) {
            Flow::Continue => {}
            Flow::Done => return Ok(()),
            Flow::Aborted => return Err(TreeSelectError::Aborted),
        }
    }
}
