use k8s_openapi::api::core::v1::Pod;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use kdash_common::NOT_SET;
use kdash_kube::utils::{controller_of, from_dynamic};
use kdash_kube::{Key, ObjectRef, ObjectStore};
use kdash_view::{Table, Text};
use kube::ResourceExt;
use std::collections::BTreeMap;

use crate::utils::{list_columns, list_row, timestamp};
use crate::{PrintError, PrintOptions, selector_matches};

#[cfg(test)]
#[path = "./pods.tests.rs"]
mod pods_tests;

pub const POD_COLUMNS: [&str; 7] = ["Name", "Labels", "Ready", "Phase", "Restarts", "Node", "Age"];

const NOT_SCHEDULED: &str = "<not scheduled>";

/// Creates "Pods" table for pods in the `object` namespace matching `selector`.
pub async fn create_pod_list_view(
    object: &ObjectRef,
    selector: Option<&BTreeMap<String, String>>,
    options: &PrintOptions,
) -> Result<Table, PrintError> {
    let key = Key::new(object.namespace.as_deref(), "v1", "Pod").with_selector(selector.cloned().unwrap_or_default());
    let pods = options
        .store
        .list(&key)
        .await?
        .iter()
        .map(from_dynamic::<Pod>)
        .collect::<Result<Vec<_>, _>>()?;

    let mut table = Table::new("Pods", "We couldn't find any pods!", list_columns(&POD_COLUMNS, options));
    for pod in &pods {
        let spec = pod.spec.as_ref();
        let status = pod.status.as_ref();
        let statuses = status.and_then(|s| s.container_statuses.as_deref()).unwrap_or_default();
        let total = spec.map_or(0, |s| s.containers.len());
        let ready = statuses.iter().filter(|s| s.ready).count();
        let restarts = statuses.iter().map(|s| s.restart_count).sum::<i32>();
        let node = spec.and_then(|s| s.node_name.as_deref()).unwrap_or(NOT_SCHEDULED);

        let row = list_row(pod, options)?
            .with("Ready", Text::new(format!("{ready}/{total}")))
            .with("Phase", Text::new(status.and_then(|s| s.phase.as_deref()).unwrap_or_default()))
            .with("Restarts", Text::new(restarts.to_string()))
            .with("Node", Text::new(node))
            .with("Age", timestamp(pod.creation_timestamp().as_ref()));
        table.add(row)?;
    }

    Ok(table)
}

/// Lists pods in `namespace` that match `selector` and are controlled by the object with `uid`.\
/// **Note** that without `uid` only the selector is checked.
pub async fn list_pods(
    namespace: Option<&str>,
    selector: &LabelSelector,
    uid: Option<&str>,
    store: &dyn ObjectStore,
) -> Result<Vec<Pod>, PrintError> {
    let key = Key::new(namespace, "v1", "Pod");
    let mut pods = Vec::new();
    for object in store.list(&key).await? {
        let pod = from_dynamic::<Pod>(&object)?;
        if !selector_matches(selector, pod.labels()) {
            continue;
        }

        let controlled = uid.is_none_or(|uid| controller_of(pod.owner_references()).is_some_and(|o| o.uid == uid));
        if controlled {
            pods.push(pod);
        }
    }

    Ok(pods)
}

/// Number of pods in each phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PodStatus {
    pub running: usize,
    pub waiting: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl PodStatus {
    /// Counts phases of the `pods`, pods in unknown phase are not counted.
    pub fn new(pods: &[Pod]) -> Self {
        let mut status = Self::default();
        for pod in pods {
            match pod.status.as_ref().and_then(|s| s.phase.as_deref()) {
                Some("Running") => status.running += 1,
                Some("Pending") => status.waiting += 1,
                Some("Succeeded") => status.succeeded += 1,
                Some("Failed") => status.failed += 1,
                phase => tracing::debug!("pod '{}' in phase {}", pod.name_any(), phase.unwrap_or(NOT_SET)),
            }
        }

        status
    }
}
