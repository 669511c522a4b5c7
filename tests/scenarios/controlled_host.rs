//! Scenario: Host-owned state
//!
//! Journey: A host application owns the value, the open flag and the
//! active row. The component only proposes changes; the host decides
//! and feeds them back.
//!
//! Success Criteria:
//! - Proposals reach the host, state changes only when the host applies them
//! - An interceptor can take over some clicks and defer others
//! - Focus and scroll requests reach the list host once per opening

use std::cell::RefCell;
use std::rc::Rc;

use treeselect::{ClickDecision, ItemId, PopupHost, TreeSelect};

use crate::common::*;

#[derive(Default)]
struct HostState {
    proposed_value: Option<Vec<ItemId>>,
    proposed_open: Option<bool>,
    active: Option<ItemId>,
    intercepted: Vec<ItemId>,
}

#[derive(Default)]
struct RecordingList {
    calls: Vec<String>,
}

impl PopupHost for RecordingList {
    fn focus_container(&mut self) {
        self.calls.push("focus".to_string());
    }

    fn scroll_to_item(&mut self, id: &ItemId) {
        self.calls.push(format!("scroll:{id}"));
    }
}

#[test]
fn scenario_host_owned_state() {
    let host = Rc::new(RefCell::new(HostState::default()));
    let (on_value, on_open, on_active, on_click) =
        (host.clone(), host.clone(), host.clone(), host.clone());

    let mut select = TreeSelect::new(
        sample_config()
            .with_multiple(true)
            .with_value(ids(&["b"]))
            .with_open(false)
            .on_update(move |value, _| on_value.borrow_mut().proposed_value = Some(value.to_vec()))
            .on_open_change(move |open| on_open.borrow_mut().proposed_open = Some(open))
            .with_set_active_item_id(move |id| on_active.borrow_mut().active = id.cloned())
            .on_item_click(move |event| {
                // `b` is handled by the host itself
                if event.id.as_str() == "b" {
                    on_click.borrow_mut().intercepted.push(event.id.clone());
                    ClickDecision::Intercepted
                } else {
                    ClickDecision::UseDefault
                }
            }),
    );
    let mut list = RecordingList::default();

    // Step 1: the user asks to open; nothing happens until the host agrees
    assert!(select.toggle_open(Some(true)));
    assert!(!select.is_open());
    assert_eq!(host.borrow().proposed_open, Some(true));
    select.set_open_prop(Some(true));
    assert!(select.is_open());

    // Step 2: layout commits, focus and scroll go to the list host
    assert!(select.layout_committed(Some(&mut list)));
    assert_eq!(list.calls, vec!["focus".to_string(), "scroll:b".to_string()]);
    assert_eq!(host.borrow().active, Some(id("b")));
    assert!(!select.layout_committed(Some(&mut list)));
    assert_eq!(list.calls.len(), 2);

    // Step 3: clicking a1 only proposes a new value
    select.click(&id("a1"));
    assert_eq!(select.value(), &[id("b")]);
    let proposal = host.borrow_mut().proposed_value.take();
    assert_eq!(proposal, Some(ids(&["b", "a1"])));
    assert_eq!(host.borrow().active, Some(id("a1")));

    // Step 4: the host applies the proposal
    select.set_value_prop(proposal);
    assert_eq!(select.value(), ids(&["b", "a1"]).as_slice());
    assert!(select.list_state().is_selected(&id("a1")));

    // Step 5: the interceptor swallows clicks on b
    select.click(&id("b"));
    assert_eq!(host.borrow().intercepted, vec![id("b")]);
    assert_eq!(host.borrow().proposed_value, None);

    // Step 6: the host releases control of the value
    select.set_value_prop(None);
    select.click(&id("a2"));
    assert_eq!(select.value(), ids(&["b", "a1", "a2"]).as_slice());
}
