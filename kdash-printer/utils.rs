use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;
use k8s_openapi::chrono::{DateTime, Utc};
use kdash_kube::ObjectRef;
use kdash_view::{Containers, Labels, Link, TableCol, TableRow, Timestamp, table_cols};
use kube::{Resource, ResourceExt};

use crate::{PrintError, PrintOptions};

#[cfg(test)]
#[path = "./utils.tests.rs"]
mod utils_tests;

pub const LABELS: &str = "Labels";

/// Returns [`Timestamp`] for the Kubernetes time, unix epoch if not set.
pub fn timestamp(time: Option<&Time>) -> Timestamp {
    Timestamp::new(time.map_or(DateTime::<Utc>::UNIX_EPOCH, |t| t.0))
}

/// Returns link to the object labelled with its name.
pub fn name_link<K: Resource<DynamicType = ()>>(object: &K, options: &PrintOptions) -> Result<Link, PrintError> {
    Ok(options.link.for_object(&ObjectRef::from_resource(object), &object.name_any())?)
}

/// Returns list table columns, without `Labels` when labels are disabled.
pub fn list_columns(names: &[&str], options: &PrintOptions) -> Vec<TableCol> {
    if options.disable_labels {
        let names = names.iter().copied().filter(|n| *n != LABELS).collect::<Vec<_>>();
        table_cols(&names)
    } else {
        table_cols(names)
    }
}

/// Creates list row with the name link and, unless disabled, object labels.
pub fn list_row<K: Resource<DynamicType = ()>>(object: &K, options: &PrintOptions) -> Result<TableRow, PrintError> {
    let mut row = TableRow::new().with("Name", name_link(object, options)?);
    if !options.disable_labels {
        row.insert(LABELS, Labels::new(object.labels().clone()));
    }

    Ok(row)
}

/// Returns names and images of the pod template containers.
pub fn template_containers(template: Option<&k8s_openapi::api::core::v1::PodTemplateSpec>) -> Containers {
    let mut containers = Containers::new();
    for container in template.and_then(|t| t.spec.as_ref()).iter().flat_map(|s| &s.containers) {
        containers.add(&container.name, container.image.as_deref().unwrap_or_default());
    }

    containers
}
