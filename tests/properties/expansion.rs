//! Property tests for group expansion and the open edge.

use proptest::prelude::*;

use treeselect::{Expansion, GroupsBehavior, ItemId, TreeItem, TreeSelect, TreeSelectConfig};

/// `g` (group: x, `h` (group: y)), `z`
fn items() -> Vec<TreeItem<&'static str>> {
    vec![
        TreeItem::group(
            "g",
            vec![
                TreeItem::leaf("x"),
                TreeItem::group("h", vec![TreeItem::leaf("y")]),
            ],
        ),
        TreeItem::leaf("z"),
    ]
}

fn select(multiple: bool) -> TreeSelect<&'static str> {
    TreeSelect::new(
        TreeSelectConfig::new(items())
            .with_get_id(|d: &&'static str| ItemId::from(*d))
            .with_multiple(multiple),
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: group clicks never touch the value and alternate
    /// collapsed/expanded starting from collapsed.
    #[test]
    fn property_group_clicks_only_toggle_expansion(
        multiple in any::<bool>(),
        clicks in proptest::collection::vec(prop_oneof![Just("g"), Just("h")], 1..30),
    ) {
        let mut select = select(multiple);

        for (n, group) in clicks.iter().enumerate() {
            let id = ItemId::from(*group);
            select.click(&id);

            let count = clicks[..=n].iter().filter(|c| *c == group).count();
            let expected = if count % 2 == 1 {
                Expansion::Collapsed
            } else {
                Expansion::Expanded
            };
            prop_assert_eq!(select.expansion(&id), expected);
            prop_assert!(select.value().is_empty());
            prop_assert_eq!(select.active_item_id(), Some(&id));
        }
    }

    /// PROPERTY: with `GroupsBehavior::None` groups select like leaves and
    /// expansion is left alone.
    #[test]
    fn property_groups_behavior_none_selects_groups(
        clicks in proptest::collection::vec(prop_oneof![Just("g"), Just("h"), Just("z")], 1..20),
    ) {
        let mut select = TreeSelect::new(
            TreeSelectConfig::new(items())
                .with_get_id(|d: &&'static str| ItemId::from(*d))
                .with_multiple(true)
                .with_groups_behavior(GroupsBehavior::None),
        );

        for id in &clicks {
            select.click(&ItemId::from(*id));
        }

        prop_assert_eq!(select.expansion(&ItemId::from("g")), Expansion::Unset);
        prop_assert_eq!(select.expansion(&ItemId::from("h")), Expansion::Unset);
        for id in ["g", "h", "z"] {
            let odd = clicks.iter().filter(|c| **c == id).count() % 2 == 1;
            prop_assert_eq!(select.value().contains(&ItemId::from(id)), odd);
        }
    }

    /// PROPERTY: every open edge activates the last value element, whatever
    /// was active before.
    #[test]
    fn property_open_edge_activates_last_value(
        picks in proptest::collection::vec(prop_oneof![Just("x"), Just("y"), Just("z")], 0..10),
        active in prop_oneof![Just("g"), Just("h"), Just("z")],
    ) {
        let mut select = select(true);
        for id in &picks {
            select.click(&ItemId::from(*id));
        }
        select.set_active_item_id(Some(ItemId::from(active)));

        select.toggle_open(Some(true));
        prop_assert!(select.layout_committed(None));

        let last = select.value().last().cloned();
        prop_assert_eq!(select.active_item_id().cloned(), last);

        // Nothing but a new open edge runs the restore again.
        select.set_active_item_id(Some(ItemId::from(active)));
        prop_assert!(!select.layout_committed(None));
        prop_assert_eq!(select.active_item_id(), Some(&ItemId::from(active)));
    }
}
