//! Property tests for click-driven selection.

use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use treeselect::{DisabledById, ItemId, TreeItem, TreeSelect, TreeSelectConfig};

const LEAVES: &[&str] = &["a1", "a2", "a3", "b", "c"];

/// `a` (group: a1, a2, a3), `b`, `c`
fn items() -> Vec<TreeItem<&'static str>> {
    vec![
        TreeItem::group(
            "a",
            vec![
                TreeItem::leaf("a1"),
                TreeItem::leaf("a2"),
                TreeItem::leaf("a3"),
            ],
        ),
        TreeItem::leaf("b"),
        TreeItem::leaf("c"),
    ]
}

fn config() -> TreeSelectConfig<&'static str> {
    TreeSelectConfig::new(items()).with_get_id(|d: &&'static str| ItemId::from(*d))
}

fn clicks() -> impl Strategy<Value = Vec<&'static str>> {
    proptest::collection::vec(proptest::sample::select(LEAVES), 0..40)
}

fn ids(raw: &[&str]) -> Vec<ItemId> {
    raw.iter().map(|s| ItemId::from(*s)).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: multi-select value holds the ids clicked an odd number of
    /// times, once each, in order of their latest insertion.
    #[test]
    fn property_multi_select_is_toggle_membership(sequence in clicks()) {
        let mut select = TreeSelect::new(config().with_multiple(true));
        let mut model: Vec<&str> = Vec::new();

        for leaf in &sequence {
            select.click(&ItemId::from(*leaf));
            match model.iter().position(|m| m == leaf) {
                Some(index) => {
                    model.remove(index);
                }
                None => model.push(*leaf),
            }
        }

        let expected = ids(&model);
        prop_assert_eq!(select.value(), expected.as_slice());
        for leaf in LEAVES {
            let odd = sequence.iter().filter(|c| *c == leaf).count() % 2 == 1;
            prop_assert_eq!(select.list_state().is_selected(&ItemId::from(*leaf)), odd);
        }
    }

    /// PROPERTY: single-select value is the last clicked leaf and the popup
    /// closes on every leaf click.
    #[test]
    fn property_single_select_keeps_last_leaf(sequence in clicks()) {
        let mut select = TreeSelect::new(config().with_default_open(true));

        for leaf in &sequence {
            select.toggle_open(Some(true));
            select.click(&ItemId::from(*leaf));
            prop_assert!(!select.is_open());
            prop_assert!(select.value().len() <= 1);
        }

        match sequence.last() {
            Some(last) => {
                let expected = ids(&[*last]);
                prop_assert_eq!(select.value(), expected.as_slice());
            }
            None => prop_assert!(select.value().is_empty()),
        }
    }

    /// PROPERTY: clicks on disabled items change nothing and report nothing.
    #[test]
    fn property_disabled_items_are_inert(
        sequence in clicks(),
        disabled in proptest::sample::subsequence(LEAVES, 0..LEAVES.len()),
    ) {
        let updates = Rc::new(RefCell::new(0usize));
        let sink = updates.clone();
        let disabled_by_id: DisabledById =
            disabled.iter().map(|d| (ItemId::from(*d), true)).collect();

        let mut select = TreeSelect::new(
            config()
                .with_multiple(true)
                .with_disabled_by_id(disabled_by_id)
                .on_update(move |_, _| *sink.borrow_mut() += 1),
        );

        let mut enabled_clicks = 0;
        for leaf in &sequence {
            select.click(&ItemId::from(*leaf));
            if !disabled.contains(leaf) {
                enabled_clicks += 1;
            }
        }

        prop_assert_eq!(*updates.borrow(), enabled_clicks);
        for d in &disabled {
            prop_assert!(!select.value().contains(&ItemId::from(*d)));
        }
    }

    /// PROPERTY: a controlled value never changes from clicks; every
    /// proposal is computed from the controlled value.
    #[test]
    fn property_controlled_value_is_never_mutated(
        initial in proptest::sample::subsequence(LEAVES, 0..LEAVES.len()),
        sequence in clicks(),
    ) {
        let proposals: Rc<RefCell<Vec<Vec<ItemId>>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = proposals.clone();
        let mut select = TreeSelect::new(
            config()
                .with_multiple(true)
                .with_value(ids(&initial))
                .on_update(move |next, _| sink.borrow_mut().push(next.to_vec())),
        );

        let expected = ids(&initial);
        for leaf in &sequence {
            select.click(&ItemId::from(*leaf));
            prop_assert_eq!(select.value(), expected.as_slice());
        }

        prop_assert_eq!(proposals.borrow().len(), sequence.len());
        for (leaf, proposal) in sequence.iter().zip(proposals.borrow().iter()) {
            let was_selected = initial.contains(leaf);
            prop_assert_eq!(proposal.contains(&ItemId::from(*leaf)), !was_selected);
        }
    }
}
