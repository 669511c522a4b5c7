use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use treeselect::infrastructure::{entry_id, entry_title, load_items, Entry};
use treeselect::ui::terminal::detect_capabilities;
use treeselect::ui::theme::IconSet;
use treeselect::ui::widgets::tree_select::{run_interactive, TerminalList};
use treeselect::{GroupsBehavior, ItemId, TreeSelect, TreeSelectConfig, TreeSelectResult};

use super::{load_settings, to_ids};

/// Final selection as printed with `--json`
#[derive(Debug, Serialize)]
struct SelectionOutput<'a> {
    value: &'a [ItemId],
    titles: Vec<String>,
}

pub fn cmd_pick(
    file: &Path,
    multiple: bool,
    groups_behavior: Option<GroupsBehavior>,
    default_value: Vec<String>,
    json: bool,
) -> Result<()> {
    let settings = load_settings();
    let loaded = load_items(file).with_context(|| format!("loading {}", file.display()))?;

    let caps = detect_capabilities();
    if !caps.is_tty {
        bail!("pick needs an interactive terminal; use `treeselect show` to print the tree");
    }

    let mut select = TreeSelect::new(
        TreeSelectConfig::new(loaded.items)
            .with_get_id(entry_id)
            .with_title(entry_title)
            .with_multiple(multiple || settings.select.multiple)
            .with_groups_behavior(groups_behavior.unwrap_or(settings.select.groups_behavior))
            .with_disabled_by_id(loaded.disabled_by_id)
            .with_default_value(to_ids(default_value))
            .with_id("pick"),
    );

    let icons = IconSet::new(settings.display.unicode.resolve(caps.supports_unicode));
    let mut list = TerminalList::new(settings.display.page_size);
    run_interactive(&mut select, &mut list, &icons, usize::from(caps.width))?;

    tracing::info!(selected = select.value().len(), "picker closed");
    println!("{}", format_selection(&select, json)?);
    Ok(())
}

/// One id per line, or a JSON object with ids and titles
fn format_selection(select: &TreeSelect<Entry>, json: bool) -> TreeSelectResult<String> {
    if !json {
        return Ok(select
            .value()
            .iter()
            .map(ItemId::as_str)
            .collect::<Vec<_>>()
            .join("\n"));
    }

    let output = SelectionOutput {
        value: select.value(),
        titles: select
            .selected_items()
            .into_iter()
            .flatten()
            .map(entry_title)
            .collect(),
    };
    Ok(serde_json::to_string(&output)?)
}
