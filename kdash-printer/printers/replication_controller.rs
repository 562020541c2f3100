use k8s_openapi::api::core::v1::ReplicationController;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use kdash_common::ratio;
use kdash_kube::utils::controller_of;
use kdash_kube::{ObjectRef, ObjectStore};
use kdash_view::{Component, Quadrant, QuadrantPosition, Summary, SummarySections, Table, Text, Width};
use kube::ResourceExt;

use crate::utils::{list_columns, list_row, template_containers, timestamp};
use crate::{
    ItemDescriptor, Object, PodStatus, PrintError, PrintOptions, create_pod_list_view, list_pods, print_selector_map,
};

#[cfg(test)]
#[path = "./replication_controller.tests.rs"]
mod replication_controller_tests;

pub const REPLICATION_CONTROLLER_COLUMNS: [&str; 6] = ["Name", "Labels", "Status", "Age", "Containers", "Selector"];

/// Creates "ReplicationControllers" table.
pub fn replication_controller_list_handler(
    list: Option<&[ReplicationController]>,
    options: &PrintOptions,
) -> Result<Table, PrintError> {
    let list = list.ok_or(PrintError::MissingInput("replication controller list"))?;
    let mut table = Table::new(
        "ReplicationControllers",
        "We couldn't find any replication controllers!",
        list_columns(&REPLICATION_CONTROLLER_COLUMNS, options),
    );

    for rc in list {
        let status = rc.status.as_ref();
        let spec = rc.spec.as_ref();
        let row = list_row(rc, options)?
            .with(
                "Status",
                Text::new(ratio(status.and_then(|s| s.available_replicas), status.map(|s| s.replicas))),
            )
            .with("Age", timestamp(rc.creation_timestamp().as_ref()))
            .with("Containers", template_containers(spec.and_then(|s| s.template.as_ref())))
            .with("Selector", print_selector_map(spec.and_then(|s| s.selector.as_ref())));
        table.add(row)?;
    }

    Ok(table)
}

/// Prints the replication controller summary.
pub async fn replication_controller_handler(
    rc: Option<&ReplicationController>,
    options: &PrintOptions,
) -> Result<Component, PrintError> {
    let rc = rc.ok_or(PrintError::MissingInput("replication controller"))?;
    let mut object = Object::new(rc)?;

    object.register_config(ReplicationControllerConfiguration::new(Some(rc)).create(options)?);

    let status = ReplicationControllerStatus::new(Some(rc));
    let store = options.store.as_ref();
    object.register_items(ItemDescriptor::new(Width::Quarter, async move { status.create(store).await }));

    let selector = rc.spec.as_ref().and_then(|s| s.selector.as_ref());
    let object_ref = ObjectRef::from_resource(rc);
    object.register_items(ItemDescriptor::new(Width::Full, async move {
        create_pod_list_view(&object_ref, selector, options).await
    }));

    if let Some(template) = rc.spec.as_ref().and_then(|s| s.template.as_ref()) {
        object.enable_pod_template(template);
    }

    object.enable_events();
    object.to_component(options).await
}

/// Builds the replication controller "Configuration" summary.
pub struct ReplicationControllerConfiguration<'a> {
    rc: Option<&'a ReplicationController>,
}

impl<'a> ReplicationControllerConfiguration<'a> {
    pub fn new(rc: Option<&'a ReplicationController>) -> Self {
        Self { rc }
    }

    /// Creates the summary, fails if there is no replication controller.
    pub fn create(&self, options: &PrintOptions) -> Result<Summary, PrintError> {
        let rc = self.rc.ok_or(PrintError::MissingInput("replication controller"))?;
        let mut sections = SummarySections::new();

        if let Some(controller) = controller_of(rc.owner_references()) {
            sections.add("Controlled By", options.link.for_owner(&ObjectRef::from_resource(rc), controller)?);
        }

        let status = rc.status.as_ref();
        if let Some(desired) = rc.spec.as_ref().and_then(|s| s.replicas) {
            let current = status.and_then(|s| s.ready_replicas).unwrap_or_default();
            sections.add_text("Replica Status", format!("Current {current} / Desired {desired}"));
        }

        sections.add_text("Replicas", status.map_or(0, |s| s.replicas).to_string());

        Ok(Summary::new("Configuration", sections))
    }
}

/// Builds the "Status" quadrant with phases of the controlled pods.
pub struct ReplicationControllerStatus<'a> {
    rc: Option<&'a ReplicationController>,
}

impl<'a> ReplicationControllerStatus<'a> {
    pub fn new(rc: Option<&'a ReplicationController>) -> Self {
        Self { rc }
    }

    /// Creates the quadrant, fails if there is no replication controller.
    pub async fn create(&self, store: &dyn ObjectStore) -> Result<Quadrant, PrintError> {
        let rc = self.rc.ok_or(PrintError::MissingInput("replication controller"))?;
        let selector = LabelSelector {
            match_labels: rc.spec.as_ref().and_then(|s| s.selector.clone()),
            match_expressions: None,
        };

        let pods = list_pods(rc.namespace().as_deref(), &selector, rc.uid().as_deref(), store).await?;
        let status = PodStatus::new(&pods);

        let mut quadrant = Quadrant::new("Status");
        quadrant.set(QuadrantPosition::NW, "Running", status.running.to_string());
        quadrant.set(QuadrantPosition::NE, "Waiting", status.waiting.to_string());
        quadrant.set(QuadrantPosition::SW, "Succeeded", status.succeeded.to_string());
        quadrant.set(QuadrantPosition::SE, "Failed", status.failed.to_string());

        Ok(quadrant)
    }
}
