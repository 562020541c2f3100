use k8s_openapi::serde_json;

use crate::testing::created;

use super::*;

#[test]
fn timestamp_test() {
    let value = serde_json::to_value(timestamp(Some(&created()))).unwrap();

    assert_eq!(1_714_557_600, value["timestamp"]);
}

#[test]
fn unset_timestamp_is_unix_epoch_test() {
    let value = serde_json::to_value(timestamp(None)).unwrap();

    assert_eq!(0, value["timestamp"]);
}
