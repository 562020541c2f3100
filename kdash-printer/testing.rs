use async_trait::async_trait;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ObjectMeta, Time};
use kdash_kube::utils::to_dynamic;
use kdash_kube::{Key, MemoryStore, ObjectStore, PathLinkGenerator, StoreError};
use kdash_plugin::{DefaultPluginManager, PluginStore};
use kdash_view::Link;
use kube::core::DynamicObject;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::PrintOptions;

pub const PREFIX: &str = "/overview";

/// Returns print options backed by an in-memory store with the given objects.
pub fn options(objects: Vec<DynamicObject>) -> PrintOptions {
    PrintOptions::new(
        Arc::new(MemoryStore::new(objects)),
        Arc::new(PathLinkGenerator::new(PREFIX)),
        Arc::new(DefaultPluginManager::new(PluginStore::new())),
    )
}

/// Returns print options which store fails every query.
pub fn failing_options() -> PrintOptions {
    PrintOptions {
        store: Arc::new(FailingStore),
        ..options(Vec::new())
    }
}

pub fn dynamic<K: Serialize>(object: &K) -> DynamicObject {
    to_dynamic(object).unwrap()
}

pub fn metadata(name: &str, namespace: &str) -> ObjectMeta {
    ObjectMeta {
        name: Some(name.to_owned()),
        namespace: Some(namespace.to_owned()),
        uid: Some(format!("{name}-uid")),
        creation_timestamp: Some(created()),
        ..Default::default()
    }
}

pub fn created() -> Time {
    Time("2024-05-01T10:00:00Z".parse().unwrap())
}

pub fn labels(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

/// Returns link generated for the namespaced object.
pub fn link(namespace: &str, section: &str, name: &str) -> Link {
    Link::new(name, format!("{PREFIX}/namespace/{namespace}/{section}/{name}"))
}

pub struct FailingStore;

#[async_trait]
impl ObjectStore for FailingStore {
    async fn list(&self, key: &Key) -> Result<Vec<DynamicObject>, StoreError> {
        Err(StoreError::Query {
            key: key.to_string(),
            message: "unavailable".to_owned(),
        })
    }

    async fn get(&self, key: &Key) -> Result<Option<DynamicObject>, StoreError> {
        Err(StoreError::Query {
            key: key.to_string(),
            message: "unavailable".to_owned(),
        })
    }
}
