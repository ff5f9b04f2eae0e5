//! Randomized properties of the access boundary over JSON object targets

use kv_safe::{AccessErrorCode, ERROR_DOMAIN, SafeAccess};
use proptest::prelude::*;
use serde_json::{Value, json};

/// Keys without the path separator, so they address a single property
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,15}"
}

/// Non-null leaf values a property could plausibly hold
fn leaf_value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[ -~]{0,32}".prop_map(Value::from),
    ]
}

proptest! {
    #[test]
    fn set_then_get_round_trips(key in key_strategy(), value in leaf_value_strategy()) {
        let mut target = json!({});

        target.try_set_value_for_key(&key, value.clone()).expect("set accepted");
        let read = target.try_value_for_key(&key).expect("get after set");
        prop_assert_eq!(read, value);
    }

    #[test]
    fn unknown_key_is_always_a_get_fault(key in key_strategy()) {
        let target = json!({});
        let err = target.try_value_for_key(&key).expect_err("empty target");

        prop_assert_eq!(err.code(), AccessErrorCode::GetValueFault);
        prop_assert_eq!(err.key(), key.as_str());
        prop_assert!(!err.fault().description.is_empty());
    }

    #[test]
    fn non_addressable_receiver_faults_by_direction(key in key_strategy(), n in any::<i64>()) {
        let mut target = json!(n);

        let get_err = target.try_value_for_key(&key).expect_err("number receiver");
        prop_assert_eq!(get_err.code(), AccessErrorCode::GetValueFault);

        let set_err = target
            .try_set_value_for_key(&key, json!(true))
            .expect_err("number receiver");
        prop_assert_eq!(set_err.code(), AccessErrorCode::SetValueFault);
    }

    #[test]
    fn null_set_clears_the_property(key in key_strategy(), value in leaf_value_strategy()) {
        let mut target = json!({});

        target.try_set_value_for_key(&key, value).expect("set accepted");
        target.try_set_value_for_key(&key, Value::Null).expect("clear accepted");

        prop_assert!(target.try_value_for_key(&key).is_err());
    }

    #[test]
    fn nested_path_round_trips(
        head in key_strategy(),
        leaf in key_strategy(),
        value in leaf_value_strategy(),
    ) {
        let mut target = json!({});
        target.try_set_value_for_key(&head, json!({})).expect("seed container");
        let path = format!("{head}.{leaf}");

        target.try_set_value_for_key_path(&path, value.clone()).expect("path set");
        let read = target.try_value_for_key_path(&path).expect("path get");
        prop_assert_eq!(read, value);
    }

    #[test]
    fn report_shape_is_stable(key in key_strategy()) {
        let target = json!({});
        let report = target.try_value_for_key(&key).expect_err("empty target").report();

        prop_assert!(report["domain"] == ERROR_DOMAIN);
        prop_assert!(report["code"] == 1);
        prop_assert!(report["info"]["exception"]["name"].is_string());
        prop_assert!(report["info"]["exception"]["description"].is_string());
    }
}
