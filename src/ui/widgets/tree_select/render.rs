//! Terminal rendering functions for the tree select picker.
//!
//! Everything renders to plain strings so the interactive loop and the
//! non-interactive `show` command share one code path.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::application::{ControlProps, ListProps, TreeSelect};
use crate::domain::entities::ListRow;
use crate::domain::value_objects::Expansion;
use crate::ui::theme::IconSet;

use super::list::TerminalList;

/// Cut `text` to at most `max_width` display columns, marking the cut
pub fn truncate_to_width(text: &str, max_width: usize, ellipsis: &str) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let ellipsis_width = ellipsis.width();
    let (budget, suffix) = if max_width > ellipsis_width {
        (max_width - ellipsis_width, ellipsis)
    } else {
        (max_width, "")
    };

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str(suffix);
    out
}

/// Render a single visible row
pub fn render_row(
    row: &ListRow,
    title: &str,
    props: &ListProps<'_>,
    icons: &IconSet,
    width: usize,
) -> String {
    let cursor = if props.is_active(&row.id) {
        format!("{} ", icons.pointer)
    } else {
        " ".repeat(icons.pointer.width() + 1)
    };
    let indent = "  ".repeat(row.indentation);

    let expand_icon = if row.is_group {
        if Expansion::of(props.expanded_by_id, &row.id).is_expanded() {
            format!("{} ", icons.expand)
        } else {
            format!("{} ", icons.collapse)
        }
    } else {
        " ".repeat(icons.expand.width() + 1)
    };

    let state_icon = if props.is_selected(&row.id) {
        icons.selected
    } else {
        icons.unselected
    };

    let suffix = if props.is_disabled(&row.id) {
        " (disabled)"
    } else {
        ""
    };

    let line = format!("{cursor}{indent}{expand_icon}{state_icon} {title}{suffix}");
    truncate_to_width(&line, width, icons.ellipsis)
}

/// Render the rows inside the list viewport
pub fn render_list<T: Clone>(
    select: &TreeSelect<T>,
    list: &TerminalList,
    icons: &IconSet,
    width: usize,
) -> String {
    let props = select.list_props();
    if props.rows.is_empty() {
        return String::from("(no items)");
    }

    let window = list.window(props.rows.len());
    let mut lines: Vec<String> = props.rows[window.clone()]
        .iter()
        .map(|row| {
            let title = select
                .item_title(&row.id)
                .unwrap_or_else(|| row.id.to_string());
            render_row(row, &title, &props, icons, width)
        })
        .collect();

    if window.len() < props.rows.len() {
        lines.push(format!(
            "({}-{} of {})",
            window.start + 1,
            window.end,
            props.rows.len()
        ));
    }

    lines.join("\n")
}

/// Render the trigger control line
pub fn render_control(props: &ControlProps, icons: &IconSet, width: usize) -> String {
    let icon = if props.open {
        icons.expand
    } else {
        icons.collapse
    };
    let content = if props.selected_options_content.is_empty() {
        "(nothing selected)"
    } else {
        props.selected_options_content.as_str()
    };
    truncate_to_width(&format!("{icon} {content}"), width, icons.ellipsis)
}

/// Render the status bar; `selectable` counts only items a click can select
pub fn render_status_bar(selected: usize, selectable: usize, multiple: bool) -> String {
    let mode = if multiple { "multiple" } else { "single" };
    format!(
        "Selected: {}/{} selectable    Mode: {}",
        selected, selectable, mode
    )
}

/// Render the help bar showing keyboard shortcuts
pub fn render_help_bar(multiple: bool, icons: &IconSet) -> String {
    let arrows = icons.arrows;
    if multiple {
        format!(
            "[Space] Toggle    [c] Clear    [q] Done    [Ctrl+C] Abort\n\
             (Use {arrows} or j/k to navigate, Enter/Space to toggle or expand)"
        )
    } else {
        format!(
            "[Enter] Choose    [c] Clear    [q] Close    [Ctrl+C] Abort\n\
             (Use {arrows} or j/k to navigate, Enter/Space to choose or expand)"
        )
    }
}

/// Render the whole picker screen
pub fn render_picker<T: Clone>(
    select: &TreeSelect<T>,
    list: &TerminalList,
    icons: &IconSet,
    width: usize,
) -> String {
    let separator = icons.separator.repeat(width.min(64));
    let control = render_control(&select.control_props(), icons, width);
    let body = render_list(select, list, icons, width);
    let status = render_status_bar(
        select.value().len(),
        select.selectable_count(),
        select.is_multiple(),
    );

    format!(
        "{control}\n{separator}\n{body}\n{separator}\n{status}\n\n{}",
        render_help_bar(select.is_multiple(), icons)
    )
}
