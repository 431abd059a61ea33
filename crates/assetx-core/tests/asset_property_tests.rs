mod common;

use assetx_core::ops::asset_ops;
use assetx_core::AssetError;
use common::new_store;
use proptest::prelude::*;

fn asset_id() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9:_-]{1,24}"
}

proptest! {
    #[test]
    fn prop_unknown_ids_do_not_exist(id in asset_id()) {
        let store = new_store();
        prop_assert!(!asset_ops::asset_exists(&store, &id).unwrap());
    }

    #[test]
    fn prop_create_then_exists(id in asset_id(), value in any::<String>()) {
        let mut store = new_store();
        asset_ops::create_asset(&mut store, &id, value).unwrap();
        prop_assert!(asset_ops::asset_exists(&store, &id).unwrap());
    }

    #[test]
    fn prop_round_trip_is_exact(id in asset_id(), value in any::<String>()) {
        let mut store = new_store();
        asset_ops::create_asset(&mut store, &id, value.clone()).unwrap();
        prop_assert_eq!(asset_ops::read_asset(&store, &id).unwrap().value, value);
    }

    #[test]
    fn prop_second_create_keeps_first_value(
        id in asset_id(),
        first in any::<String>(),
        second in any::<String>(),
    ) {
        let mut store = new_store();
        asset_ops::create_asset(&mut store, &id, first.clone()).unwrap();

        let result = asset_ops::create_asset(&mut store, &id, second);
        let is_already_exists = matches!(result, Err(AssetError::AlreadyExists { .. }));
        prop_assert!(is_already_exists);
        prop_assert_eq!(asset_ops::read_asset(&store, &id).unwrap().value, first);
    }

    #[test]
    fn prop_update_replaces_value(
        id in asset_id(),
        first in any::<String>(),
        second in any::<String>(),
    ) {
        let mut store = new_store();
        asset_ops::create_asset(&mut store, &id, first).unwrap();
        asset_ops::update_asset(&mut store, &id, second.clone()).unwrap();
        prop_assert_eq!(asset_ops::read_asset(&store, &id).unwrap().value, second);
    }

    #[test]
    fn prop_delete_then_absent(id in asset_id(), value in any::<String>()) {
        let mut store = new_store();
        asset_ops::create_asset(&mut store, &id, value).unwrap();
        asset_ops::delete_asset(&mut store, &id).unwrap();
        prop_assert!(!asset_ops::asset_exists(&store, &id).unwrap());
    }
}

#[test]
fn test_round_trip_edge_values() {
    let values = [
        "",
        "ünïcødé 🚗 资产",
        r#"{"value":"nested"}"#,
        "quote \" backslash \\ tab \t newline \n",
        "\u{0000}control",
    ];

    for (i, value) in values.iter().enumerate() {
        let mut store = new_store();
        let id = format!("edge-{}", i);
        asset_ops::create_asset(&mut store, &id, value.to_string()).unwrap();
        assert_eq!(
            asset_ops::read_asset(&store, &id).unwrap().value,
            *value,
            "round trip failed for {:?}",
            value
        );
    }
}
