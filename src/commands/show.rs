use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use treeselect::infrastructure::{entry_id, entry_title, load_items, Entry};
use treeselect::ui::terminal::detect_capabilities;
use treeselect::ui::theme::IconSet;
use treeselect::ui::widgets::tree_select::{render_control, render_list, TerminalList};
use treeselect::{Expansion, ExpandedById, ItemId, TreeSelect, TreeSelectConfig, TreeSelectResult};

use super::{load_settings, to_ids};

#[derive(Debug, Serialize)]
struct RowOutput {
    id: ItemId,
    title: String,
    indentation: usize,
    group: bool,
    expanded: bool,
    selected: bool,
    disabled: bool,
    active: bool,
}

#[derive(Debug, Serialize)]
struct ShowOutput {
    value: Vec<ItemId>,
    summary: String,
    rows: Vec<RowOutput>,
}

pub fn cmd_show(
    file: &Path,
    value: Vec<String>,
    multiple: bool,
    collapse: Vec<String>,
    json: bool,
) -> Result<()> {
    let settings = load_settings();
    let loaded = load_items(file).with_context(|| format!("loading {}", file.display()))?;

    let expanded_by_id: ExpandedById = to_ids(collapse)
        .into_iter()
        .map(|id| (id, false))
        .collect();

    let select = TreeSelect::new(
        TreeSelectConfig::new(loaded.items)
            .with_get_id(entry_id)
            .with_title(entry_title)
            .with_multiple(multiple || settings.select.multiple)
            .with_groups_behavior(settings.select.groups_behavior)
            .with_disabled_by_id(loaded.disabled_by_id)
            .with_expanded_by_id(expanded_by_id)
            .with_value(to_ids(value))
            .with_open(true)
            .with_id("show"),
    );

    if json {
        println!("{}", show_json(&select)?);
        return Ok(());
    }

    let caps = detect_capabilities();
    let icons = IconSet::new(settings.display.unicode.resolve(caps.supports_unicode));
    let width = usize::from(caps.width);
    println!("{}", render_control(&select.control_props(), &icons, width));
    println!("{}", render_list(&select, &TerminalList::new(usize::MAX), &icons, width));
    Ok(())
}

fn show_json(select: &TreeSelect<Entry>) -> TreeSelectResult<String> {
    let props = select.list_props();
    let rows = props
        .rows
        .iter()
        .map(|row| RowOutput {
            id: row.id.clone(),
            title: select
                .item_title(&row.id)
                .unwrap_or_else(|| row.id.to_string()),
            indentation: row.indentation,
            group: row.is_group,
            expanded: row.is_group && Expansion::of(props.expanded_by_id, &row.id).is_expanded(),
            selected: props.is_selected(&row.id),
            disabled: props.is_disabled(&row.id),
            active: props.is_active(&row.id),
        })
        .collect();

    let output = ShowOutput {
        value: select.value().to_vec(),
        summary: select.selected_options_content(),
        rows,
    };
    Ok(serde_json::to_string_pretty(&output)?)
}
