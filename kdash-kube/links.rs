use k8s_openapi::apimachinery::pkg::apis::meta::v1::OwnerReference;
use kdash_view::Link;

use crate::{ObjectRef, is_cluster_scoped, split_api_version};

#[cfg(test)]
#[path = "./links.tests.rs"]
mod links_tests;

/// Possible errors when generating links.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum LinkError {
    /// There is no view for the kind.
    #[error("cannot create link for {api_version} {kind}")]
    UnsupportedKind { api_version: String, kind: String },

    /// Object has no name.
    #[error("cannot create link for {kind} without a name")]
    MissingName { kind: String },

    /// Namespaced object has no namespace.
    #[error("cannot create link for {kind} '{name}' without a namespace")]
    MissingNamespace { kind: String, name: String },
}

/// Creates links to the views of Kubernetes objects.
pub trait LinkGenerator: Send + Sync {
    /// Creates link for the object described by its namespace, group/version and kind.
    fn for_gvk(
        &self,
        namespace: Option<&str>,
        api_version: &str,
        kind: &str,
        name: &str,
        text: &str,
    ) -> Result<Link, LinkError>;

    /// Creates link for the object.
    fn for_object(&self, object: &ObjectRef, text: &str) -> Result<Link, LinkError> {
        self.for_gvk(
            object.namespace.as_deref(),
            &object.api_version,
            &object.kind,
            &object.name,
            text,
        )
    }

    /// Creates link for the owner of the `parent` object, the owner lives in the parent's namespace.
    fn for_owner(&self, parent: &ObjectRef, owner: &OwnerReference) -> Result<Link, LinkError> {
        self.for_gvk(
            parent.namespace.as_deref(),
            &owner.api_version,
            &owner.kind,
            &owner.name,
            &owner.name,
        )
    }
}

/// [`LinkGenerator`] that builds overview paths, e.g. `/overview/namespace/default/workloads/pods/nginx`.
pub struct PathLinkGenerator {
    prefix: String,
}

impl PathLinkGenerator {
    /// Creates new [`PathLinkGenerator`] instance.
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.trim_end_matches('/').to_owned(),
        }
    }
}

impl LinkGenerator for PathLinkGenerator {
    fn for_gvk(
        &self,
        namespace: Option<&str>,
        api_version: &str,
        kind: &str,
        name: &str,
        text: &str,
    ) -> Result<Link, LinkError> {
        if name.is_empty() {
            return Err(LinkError::MissingName { kind: kind.to_owned() });
        }

        let Some(section) = section_for(api_version, kind) else {
            return Err(LinkError::UnsupportedKind {
                api_version: api_version.to_owned(),
                kind: kind.to_owned(),
            });
        };

        let path = if is_cluster_scoped(api_version, kind) {
            format!("{}/cluster-overview/{section}/{name}", self.prefix)
        } else {
            let Some(namespace) = namespace.filter(|n| !n.is_empty()) else {
                return Err(LinkError::MissingNamespace {
                    kind: kind.to_owned(),
                    name: name.to_owned(),
                });
            };

            format!("{}/namespace/{namespace}/{section}/{name}", self.prefix)
        };

        Ok(Link::new(text, path))
    }
}

fn section_for(api_version: &str, kind: &str) -> Option<&'static str> {
    let section = match (split_api_version(api_version).0, kind) {
        ("", "Pod") => "workloads/pods",
        ("apps", "Deployment") => "workloads/deployments",
        ("apps", "ReplicaSet") => "workloads/replica-sets",
        ("apps", "DaemonSet") => "workloads/daemon-sets",
        ("apps", "StatefulSet") => "workloads/stateful-sets",
        ("", "ReplicationController") => "workloads/replication-controllers",
        ("batch", "Job") => "workloads/jobs",
        ("batch", "CronJob") => "workloads/cron-jobs",
        ("", "Service") => "discovery-and-load-balancing/services",
        ("networking.k8s.io", "Ingress") => "discovery-and-load-balancing/ingresses",
        ("", "ConfigMap") => "config-and-storage/config-maps",
        ("", "Secret") => "config-and-storage/secrets",
        ("", "ServiceAccount") => "config-and-storage/service-accounts",
        ("", "PersistentVolumeClaim") => "config-and-storage/persistent-volume-claims",
        ("rbac.authorization.k8s.io", "Role") => "rbac/roles",
        ("rbac.authorization.k8s.io", "RoleBinding") => "rbac/role-bindings",
        ("rbac.authorization.k8s.io", "ClusterRole") => "rbac/cluster-roles",
        ("rbac.authorization.k8s.io", "ClusterRoleBinding") => "rbac/cluster-role-bindings",
        ("", "Namespace") => "namespaces",
        ("", "Node") => "nodes",
        ("", "PersistentVolume") => "storage/persistent-volumes",
        _ => return None,
    };

    Some(section)
}
