use async_trait::async_trait;
use kube::core::DynamicObject;
use std::collections::BTreeMap;
use std::fmt::Display;

use crate::ObjectRef;

/// Possible errors from the object store.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// Cannot read manifest file.
    #[error("cannot read manifest file")]
    Io(#[from] std::io::Error),

    /// Cannot parse YAML manifest.
    #[error("cannot parse YAML manifest")]
    Yaml(#[from] serde_yaml::Error),

    /// Cannot convert object between its dynamic and typed form.
    #[error("cannot convert object")]
    Json(#[from] k8s_openapi::serde_json::Error),

    /// Object is not a valid Kubernetes resource.
    #[error("invalid object: {0}")]
    Invalid(String),

    /// Store cannot answer the query.
    #[error("query {key} failed: {message}")]
    Query { key: String, message: String },
}

/// Query for the objects in the [`ObjectStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Key {
    pub namespace: Option<String>,
    pub api_version: String,
    pub kind: String,
    pub name: Option<String>,
    pub selector: Option<BTreeMap<String, String>>,
}

impl Key {
    /// Creates new [`Key`] for all objects of the given kind.
    pub fn new(namespace: Option<&str>, api_version: &str, kind: &str) -> Self {
        Self {
            namespace: namespace.map(String::from),
            api_version: api_version.to_owned(),
            kind: kind.to_owned(),
            name: None,
            selector: None,
        }
    }

    /// Creates new [`Key`] pointing to the given object.
    pub fn from_ref(object: &ObjectRef) -> Self {
        Self::new(object.namespace.as_deref(), &object.api_version, &object.kind).with_name(&object.name)
    }

    /// Narrows the query to a single object name.
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_owned());
        self
    }

    /// Narrows the query to objects which labels contain all the `selector` pairs.
    pub fn with_selector(mut self, selector: BTreeMap<String, String>) -> Self {
        self.selector = Some(selector);
        self
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.api_version, self.kind)?;
        if let Some(namespace) = &self.namespace {
            write!(f, " in {namespace}")?;
        }

        if let Some(name) = &self.name {
            write!(f, " named {name}")?;
        }

        if let Some(selector) = &self.selector {
            let selector = selector.iter().map(|(k, v)| format!("{k}={v}")).collect::<Vec<_>>();
            write!(f, " selected by {}", selector.join(","))?;
        }

        Ok(())
    }
}

/// Source of Kubernetes objects used by printers.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Returns all objects matching the `key`.
    async fn list(&self, key: &Key) -> Result<Vec<DynamicObject>, StoreError>;

    /// Returns the first object matching the `key` or `None` if there is no such object.
    async fn get(&self, key: &Key) -> Result<Option<DynamicObject>, StoreError>;
}
