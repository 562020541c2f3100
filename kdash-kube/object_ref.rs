use kube::ResourceExt;
use kube::core::DynamicObject;

#[cfg(test)]
#[path = "./object_ref.tests.rs"]
mod object_ref_tests;

/// Identifies a single Kubernetes object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectRef {
    pub api_version: String,
    pub kind: String,
    pub namespace: Option<String>,
    pub name: String,
    pub uid: Option<String>,
}

impl ObjectRef {
    /// Creates new [`ObjectRef`] for the typed Kubernetes resource.
    pub fn from_resource<K: kube::Resource<DynamicType = ()>>(object: &K) -> Self {
        Self {
            api_version: K::api_version(&()).into_owned(),
            kind: K::kind(&()).into_owned(),
            namespace: object.namespace(),
            name: object.name_any(),
            uid: object.uid(),
        }
    }

    /// Creates new [`ObjectRef`] for the [`DynamicObject`].\
    /// **Note** that missing type information results in empty `api_version` and `kind`.
    pub fn from_dynamic(object: &DynamicObject) -> Self {
        let (api_version, kind) = object
            .types
            .as_ref()
            .map(|t| (t.api_version.clone(), t.kind.clone()))
            .unwrap_or_default();

        Self {
            api_version,
            kind,
            namespace: object.namespace(),
            name: object.name_any(),
            uid: object.uid(),
        }
    }

    /// Returns API group of the object, empty for the core group.
    pub fn group(&self) -> &str {
        split_api_version(&self.api_version).0
    }

    /// Returns API version without the group.
    pub fn version(&self) -> &str {
        split_api_version(&self.api_version).1
    }

    /// Returns `true` if object has the given `api_version` and `kind`.
    pub fn is(&self, api_version: &str, kind: &str) -> bool {
        self.api_version == api_version && self.kind == kind
    }
}

/// Splits `api_version` into group and version parts.
pub fn split_api_version(api_version: &str) -> (&str, &str) {
    match api_version.split_once('/') {
        Some((group, version)) => (group, version),
        None => ("", api_version),
    }
}

/// Returns `true` for the well known kinds that do not live in a namespace.
pub fn is_cluster_scoped(api_version: &str, kind: &str) -> bool {
    matches!(
        (split_api_version(api_version).0, kind),
        ("", "Namespace")
            | ("", "Node")
            | ("", "PersistentVolume")
            | ("rbac.authorization.k8s.io", "ClusterRole")
            | ("rbac.authorization.k8s.io", "ClusterRoleBinding")
            | ("storage.k8s.io", "StorageClass")
            | ("apiextensions.k8s.io", "CustomResourceDefinition")
    )
}
