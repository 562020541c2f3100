use k8s_openapi::apimachinery::pkg::apis::meta::v1::OwnerReference;
use k8s_openapi::serde_json;
use kube::core::DynamicObject;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

use crate::StoreError;

#[cfg(test)]
#[path = "./utils.tests.rs"]
mod utils_tests;

/// Converts [`DynamicObject`] to the typed Kubernetes resource.
pub fn from_dynamic<K: DeserializeOwned>(object: &DynamicObject) -> Result<K, StoreError> {
    let value = serde_json::to_value(object)?;
    Ok(serde_json::from_value(value)?)
}

/// Converts typed Kubernetes resource to [`DynamicObject`].
pub fn to_dynamic<K: serde::Serialize>(object: &K) -> Result<DynamicObject, StoreError> {
    let value = serde_json::to_value(object)?;
    Ok(serde_json::from_value(value)?)
}

/// Returns `true` if `labels` contain every pair from the `selector`.\
/// **Note** that an empty selector matches everything.
pub fn labels_match(selector: &BTreeMap<String, String>, labels: &BTreeMap<String, String>) -> bool {
    selector.iter().all(|(k, v)| labels.get(k) == Some(v))
}

/// Returns the owner reference that is marked as the managing controller.
pub fn controller_of(owners: &[OwnerReference]) -> Option<&OwnerReference> {
    owners.iter().find(|o| o.controller == Some(true))
}
