use async_trait::async_trait;
use k8s_openapi::serde_json::{self, Value};
use kube::ResourceExt;
use kube::core::DynamicObject;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

use crate::utils::labels_match;
use crate::{Key, ObjectStore, StoreError, is_cluster_scoped};

#[cfg(test)]
#[path = "./memory_store.tests.rs"]
mod memory_store_tests;

/// Immutable [`ObjectStore`] backed by objects loaded from manifests.\
/// **Note** that objects are kept sorted by namespace and name.
#[derive(Default)]
pub struct MemoryStore {
    objects: Vec<DynamicObject>,
}

impl MemoryStore {
    /// Creates new [`MemoryStore`] instance from objects.
    pub fn new(mut objects: Vec<DynamicObject>) -> Self {
        objects.sort_by(|a, b| (a.namespace(), a.name_any()).cmp(&(b.namespace(), b.name_any())));
        Self { objects }
    }

    /// Parses multi-document YAML (or JSON) manifests.\
    /// Items of `List` kinds are flattened and namespaced objects without namespace get `default_namespace`.
    pub fn from_yaml(manifests: &str, default_namespace: &str) -> Result<Self, StoreError> {
        Ok(Self::new(parse_manifests(manifests, default_namespace)?))
    }

    /// Reads and parses all the manifest files.
    pub async fn from_files<P: AsRef<Path>>(paths: &[P], default_namespace: &str) -> Result<Self, StoreError> {
        let mut objects = Vec::new();
        for path in paths {
            let manifests = tokio::fs::read_to_string(path.as_ref()).await?;
            let parsed = parse_manifests(&manifests, default_namespace)?;
            debug!("loaded {} objects from {}", parsed.len(), path.as_ref().display());
            objects.extend(parsed);
        }

        Ok(Self::new(objects))
    }

    /// Returns all objects in the store.
    pub fn objects(&self) -> &[DynamicObject] {
        &self.objects
    }

    fn matching<'a>(&'a self, key: &'a Key) -> impl Iterator<Item = &'a DynamicObject> + 'a {
        self.objects.iter().filter(move |o| matches(key, o))
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn list(&self, key: &Key) -> Result<Vec<DynamicObject>, StoreError> {
        let objects = self.matching(key).cloned().collect::<Vec<_>>();
        debug!("list {key}: {} objects", objects.len());
        Ok(objects)
    }

    async fn get(&self, key: &Key) -> Result<Option<DynamicObject>, StoreError> {
        let object = self.matching(key).next().cloned();
        debug!("get {key}: found={}", object.is_some());
        Ok(object)
    }
}

fn matches(key: &Key, object: &DynamicObject) -> bool {
    let Some(types) = &object.types else {
        return false;
    };

    types.api_version == key.api_version
        && types.kind == key.kind
        && key.namespace.as_ref().is_none_or(|ns| object.metadata.namespace.as_ref() == Some(ns))
        && key.name.as_ref().is_none_or(|name| object.metadata.name.as_ref() == Some(name))
        && key.selector.as_ref().is_none_or(|s| labels_match(s, object.labels()))
}

fn parse_manifests(manifests: &str, default_namespace: &str) -> Result<Vec<DynamicObject>, StoreError> {
    let mut objects = Vec::new();
    for document in serde_yaml::Deserializer::from_str(manifests) {
        let value = serde_json::to_value(serde_yaml::Value::deserialize(document)?)?;
        if value.is_null() {
            continue;
        }

        if is_list(&value) {
            for item in value["items"].as_array().into_iter().flatten() {
                objects.push(to_object(item.clone(), default_namespace)?);
            }
        } else {
            objects.push(to_object(value, default_namespace)?);
        }
    }

    Ok(objects)
}

fn is_list(value: &Value) -> bool {
    value["kind"].as_str().is_some_and(|k| k.ends_with("List")) && value["items"].is_array()
}

fn to_object(value: Value, default_namespace: &str) -> Result<DynamicObject, StoreError> {
    let mut object: DynamicObject = serde_json::from_value(value)?;
    let Some(types) = &object.types else {
        return Err(StoreError::Invalid(format!(
            "object '{}' has no apiVersion or kind",
            object.name_any()
        )));
    };

    if object.metadata.name.is_none() {
        return Err(StoreError::Invalid(format!("{} without a name", types.kind)));
    }

    if object.metadata.namespace.is_none() && !is_cluster_scoped(&types.api_version, &types.kind) {
        object.metadata.namespace = Some(default_namespace.to_owned());
    }

    Ok(object)
}
