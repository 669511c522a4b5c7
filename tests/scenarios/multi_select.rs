//! Scenario: Multi-select with a disabled item
//!
//! Journey: A user ticks several items, unticks one, tries a disabled
//! item, then clears everything.
//!
//! Success Criteria:
//! - Clicks toggle membership in insertion order
//! - The popup stays open
//! - Disabled items are inert
//! - Every change is reported with index-aligned item data

use std::cell::RefCell;
use std::rc::Rc;

use treeselect::{DisabledById, ItemId, TreeSelect};

use crate::common::*;

type Reports = Rc<RefCell<Vec<(Vec<ItemId>, Vec<Option<&'static str>>)>>>;

#[test]
fn scenario_multi_select_journey() {
    let reports: Reports = Rc::new(RefCell::new(Vec::new()));
    let sink = reports.clone();
    let mut disabled = DisabledById::new();
    disabled.insert(id("a2"), true);

    let mut select = TreeSelect::new(
        sample_config()
            .with_multiple(true)
            .with_default_open(true)
            .with_disabled_by_id(disabled)
            .on_update(move |value, items| {
                let keys = items.iter().map(|item| item.map(|n| n.key)).collect();
                sink.borrow_mut().push((value.to_vec(), keys));
            }),
    );

    // Step 1: tick a1 then b
    select.click(&id("a1"));
    assert_eq!(select.value(), &[id("a1")]);
    select.click(&id("b"));
    assert_eq!(select.value(), ids(&["a1", "b"]).as_slice());
    assert!(select.is_open());

    // Step 2: untick a1
    select.click(&id("a1"));
    assert_eq!(select.value(), &[id("b")]);

    // Step 3: the disabled item does nothing
    select.click(&id("a2"));
    assert_eq!(select.value(), &[id("b")]);
    assert_eq!(select.active_item_id(), Some(&id("a1")));

    // Step 4: summary and clear
    assert_eq!(select.selected_options_content(), "Bee");
    select.clear_value();
    assert!(select.value().is_empty());
    assert!(select.is_open());

    assert_eq!(
        *reports.borrow(),
        vec![
            (ids(&["a1"]), vec![Some("a1")]),
            (ids(&["a1", "b"]), vec![Some("a1"), Some("b")]),
            (ids(&["b"]), vec![Some("b")]),
            (vec![], vec![]),
        ]
    );
}

#[test]
fn scenario_items_removed_under_the_selection() {
    let mut select = TreeSelect::new(
        sample_config()
            .with_multiple(true)
            .with_default_value(ids(&["a1", "b"])),
    );

    // The host drops group `a` from its data
    select.set_items(vec![treeselect::TreeItem::leaf(node("b", "Bee"))]);

    assert_eq!(select.value(), ids(&["a1", "b"]).as_slice());
    let keys: Vec<Option<&str>> = select
        .selected_items()
        .into_iter()
        .map(|item| item.map(|n| n.key))
        .collect();
    assert_eq!(keys, vec![None, Some("b")]);
    assert_eq!(select.selected_options_content(), "Bee");
    assert!(!select.click(&id("a1")));
}
