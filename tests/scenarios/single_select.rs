//! Scenario: Single-select with an expandable group
//!
//! Journey: A user opens the picker, folds and unfolds a group, then
//! picks one leaf and changes their mind.
//!
//! Success Criteria:
//! - Group clicks only change expansion
//! - Each leaf click replaces the value and closes the popup
//! - Reopening restores the active row to the selection

use std::cell::RefCell;
use std::rc::Rc;

use treeselect::{Expansion, TreeSelect};

use crate::common::*;

#[test]
fn scenario_single_select_journey() {
    let open_log: Rc<RefCell<Vec<bool>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = open_log.clone();
    let mut select = TreeSelect::new(
        sample_config()
            .with_default_value(vec![])
            .on_open_change(move |open| sink.borrow_mut().push(open)),
    );

    // Step 1: open the popup
    assert!(select.toggle_open(Some(true)));
    assert!(select.layout_committed(None));
    assert_eq!(select.active_item_id(), None);

    // Step 2: click the group twice
    select.click(&id("a"));
    assert_eq!(
        select.list_state().expanded_by_id.get().get(&id("a")),
        Some(&false)
    );
    assert!(select.value().is_empty());

    select.click(&id("a"));
    assert_eq!(
        select.list_state().expanded_by_id.get().get(&id("a")),
        Some(&true)
    );
    assert_eq!(select.expansion(&id("a")), Expansion::Expanded);

    // Step 3: pick a1
    select.click(&id("a1"));
    assert_eq!(select.value(), &[id("a1")]);
    assert!(!select.is_open());
    assert_eq!(select.control_props().selected_options_content, "First");

    // Step 4: reopen, the active row jumps to the selection
    select.set_active_item_id(Some(id("b")));
    select.toggle_open(Some(true));
    assert!(select.layout_committed(None));
    assert_eq!(select.active_item_id(), Some(&id("a1")));

    // Step 5: pick b instead
    select.click(&id("b"));
    assert_eq!(select.value(), &[id("b")]);
    assert!(!select.is_open());
    assert!(select.list_state().is_selected(&id("b")));
    assert!(!select.list_state().is_selected(&id("a1")));

    assert_eq!(*open_log.borrow(), vec![true, false, true, false]);
}

#[test]
fn scenario_single_select_with_selectable_groups() {
    let mut select = TreeSelect::new(
        sample_config()
            .with_groups_behavior(treeselect::GroupsBehavior::None)
            .with_default_open(true),
    );

    select.click(&id("a"));

    assert_eq!(select.value(), &[id("a")]);
    assert!(!select.is_open());
    assert_eq!(select.expansion(&id("a")), Expansion::Unset);
}
