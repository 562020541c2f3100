use k8s_openapi::api::core::v1::{Container, EnvVar, Event, PodTemplateSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kdash_common::{NOT_SET, join_or_none};
use kdash_kube::utils::{controller_of, from_dynamic, to_dynamic};
use kdash_kube::{Key, ObjectRef};
use kdash_view::{
    Component, FlexLayout, FlexLayoutItem, Labels, Summary, SummarySection, SummarySections, Table, TableRow, Text,
    Width, table_cols,
};
use kube::Resource;
use kube::core::DynamicObject;
use serde::Serialize;
use std::future::Future;
use std::pin::Pin;

use crate::utils::timestamp;
use crate::{PrintError, PrintOptions};

#[cfg(test)]
#[path = "./object.tests.rs"]
mod object_tests;

/// Boxed future resolving to a printer result.
pub type BoxedFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, PrintError>> + Send + 'a>>;

/// Lazily computed component placed in the object summary.
pub struct ItemDescriptor<'a> {
    pub width: Width,
    pub func: BoxedFuture<'a, Component>,
}

impl<'a> ItemDescriptor<'a> {
    /// Creates new [`ItemDescriptor`] instance, `func` is awaited only when the summary is built.
    pub fn new<F, C>(width: Width, func: F) -> Self
    where
        F: Future<Output = Result<C, PrintError>> + Send + 'a,
        C: Into<Component>,
    {
        Self {
            width,
            func: Box::pin(async move { func.await.map(Into::into) }),
        }
    }
}

/// Builder of the object summary layout.\
/// **Note** that sections are always laid out as: configuration and status, metadata, items,
/// pod template and events.
pub struct Object<'a> {
    object_ref: ObjectRef,
    metadata: ObjectMeta,
    dynamic: DynamicObject,
    config: Option<Summary>,
    summary: Option<Summary>,
    items: Vec<ItemDescriptor<'a>>,
    pod_template: Option<PodTemplateSpec>,
    events: bool,
}

impl<'a> Object<'a> {
    /// Creates new [`Object`] builder for the typed Kubernetes resource.
    pub fn new<K>(object: &K) -> Result<Self, PrintError>
    where
        K: Resource<DynamicType = ()> + Serialize,
    {
        Ok(Self {
            object_ref: ObjectRef::from_resource(object),
            metadata: object.meta().clone(),
            dynamic: to_dynamic(object)?,
            config: None,
            summary: None,
            items: Vec::new(),
            pod_template: None,
            events: false,
        })
    }

    /// Sets the configuration summary.
    pub fn register_config(&mut self, config: Summary) {
        self.config = Some(config);
    }

    /// Sets the status summary.
    pub fn register_summary(&mut self, summary: Summary) {
        self.summary = Some(summary);
    }

    /// Adds item placed after the metadata.
    pub fn register_items(&mut self, item: ItemDescriptor<'a>) {
        self.items.push(item);
    }

    /// Shows pod template labels and containers.
    pub fn enable_pod_template(&mut self, template: &PodTemplateSpec) {
        self.pod_template = Some(template.clone());
    }

    /// Shows events involving this object, if enabled in the print options.
    pub fn enable_events(&mut self) {
        self.events = true;
    }

    /// Builds the "Summary" flex layout.
    pub async fn to_component(self, options: &PrintOptions) -> Result<Component, PrintError> {
        let plugin = options.plugins.print(&self.dynamic).await?;
        let mut layout = FlexLayout::new("Summary");

        let section = layout.add_section();
        if let Some(config) = with_sections(self.config, "Configuration", plugin.config) {
            section.add(config, Width::Half)?;
        }

        if let Some(status) = with_sections(self.summary, "Status", plugin.status) {
            section.add(status, Width::Half)?;
        }

        layout
            .add_section()
            .add(metadata_summary(&self.object_ref, &self.metadata, options)?, Width::Half)?;

        let mut items = Vec::with_capacity(self.items.len() + plugin.items.len());
        for item in self.items {
            items.push(FlexLayoutItem::new(item.func.await?, item.width));
        }

        items.extend(plugin.items);
        layout.pack(items);

        if let Some(template) = &self.pod_template {
            layout.pack(pod_template_items(template)?);
        }

        if self.events && options.enable_events {
            let events = events_table(&self.object_ref, options).await?;
            layout.add_section().add(events, Width::Full)?;
        }

        layout.compact();
        Ok(layout.into())
    }
}

fn with_sections(summary: Option<Summary>, title: &str, sections: Vec<SummarySection>) -> Option<Summary> {
    match summary {
        Some(mut summary) => {
            summary.add(sections);
            Some(summary)
        },
        None if !sections.is_empty() => Some(Summary::new(title, sections)),
        None => None,
    }
}

/// Creates "Metadata" summary with age, labels, annotations and the controller link.
pub(crate) fn metadata_summary(
    object: &ObjectRef,
    metadata: &ObjectMeta,
    options: &PrintOptions,
) -> Result<Summary, PrintError> {
    let mut sections = SummarySections::new();
    sections.add("Age", timestamp(metadata.creation_timestamp.as_ref()));

    if let Some(labels) = metadata.labels.as_ref().filter(|l| !l.is_empty()) {
        sections.add("Labels", Labels::new(labels.clone()));
    }

    if let Some(annotations) = metadata.annotations.as_ref().filter(|a| !a.is_empty()) {
        sections.add("Annotations", Labels::new(annotations.clone()));
    }

    let owners = metadata.owner_references.as_deref().unwrap_or_default();
    if let Some(controller) = controller_of(owners) {
        sections.add("Controlled By", options.link.for_owner(object, controller)?);
    }

    Ok(Summary::new("Metadata", sections))
}

fn pod_template_items(template: &PodTemplateSpec) -> Result<Vec<FlexLayoutItem>, PrintError> {
    let labels = template.metadata.as_ref().and_then(|m| m.labels.as_ref());
    let mut sections = SummarySections::new();
    sections.add("Labels", Labels::from(labels));

    let mut items = vec![FlexLayoutItem::new(Summary::new("Pod Template", sections), Width::Full)];
    for container in template.spec.iter().flat_map(|s| &s.containers) {
        items.push(FlexLayoutItem::new(container_summary(container)?, Width::Half));
    }

    Ok(items)
}

fn container_summary(container: &Container) -> Result<Summary, PrintError> {
    let mut sections = SummarySections::new();
    sections.add_text("Image", container.image.as_deref().unwrap_or(NOT_SET));

    if let Some(policy) = &container.image_pull_policy {
        sections.add_text("Image Pull Policy", policy);
    }

    if let Some(ports) = container.ports.as_ref().filter(|p| !p.is_empty()) {
        let ports = ports
            .iter()
            .map(|p| format!("{}/{}", p.container_port, p.protocol.as_deref().unwrap_or("TCP")))
            .collect::<Vec<_>>();
        sections.add_text("Ports", join_or_none(&ports, ", "));
    }

    if let Some(command) = container.command.as_ref().filter(|c| !c.is_empty()) {
        sections.add_text("Command", command.join(" "));
    }

    if let Some(args) = container.args.as_ref().filter(|a| !a.is_empty()) {
        sections.add_text("Args", args.join(" "));
    }

    if let Some(env) = container.env.as_ref().filter(|e| !e.is_empty()) {
        sections.add("Environment", environment_table(env)?);
    }

    Ok(Summary::new(format!("Container {}", container.name), sections))
}

fn environment_table(env: &[EnvVar]) -> Result<Table, PrintError> {
    let mut table = Table::new("Environment", "", table_cols(&["Name", "Value", "Source"]));
    for var in env {
        let row = TableRow::new()
            .with("Name", Text::new(&var.name))
            .with("Value", Text::new(var.value.as_deref().unwrap_or_default()))
            .with("Source", Text::new(env_source(var)));
        table.add(row)?;
    }

    Ok(table)
}

fn env_source(var: &EnvVar) -> String {
    let Some(source) = &var.value_from else {
        return String::new();
    };

    if let Some(r) = &source.config_map_key_ref {
        format!("config map {}:{}", r.name, r.key)
    } else if let Some(r) = &source.secret_key_ref {
        format!("secret {}:{}", r.name, r.key)
    } else if let Some(r) = &source.field_ref {
        format!("field {}", r.field_path)
    } else if let Some(r) = &source.resource_field_ref {
        format!("resource {}", r.resource)
    } else {
        String::new()
    }
}

/// Creates "Events" table for events that involve the object.
async fn events_table(object: &ObjectRef, options: &PrintOptions) -> Result<Table, PrintError> {
    let key = Key::new(object.namespace.as_deref(), "v1", "Event");
    let columns = table_cols(&["Message", "Reason", "Type", "First Seen", "Last Seen", "From", "Count"]);
    let mut table = Table::new("Events", "There are no events!", columns);

    for dynamic in options.store.list(&key).await? {
        let event = from_dynamic::<Event>(&dynamic)?;
        if !involves(&event, object) {
            continue;
        }

        let first_seen = event.first_timestamp.as_ref().or(event.metadata.creation_timestamp.as_ref());
        let last_seen = event.last_timestamp.as_ref().or(first_seen);
        let from = event.source.as_ref().map(|s| match (&s.component, &s.host) {
            (Some(component), Some(host)) => format!("{component} on {host}"),
            (Some(component), None) => component.clone(),
            (None, Some(host)) => host.clone(),
            (None, None) => String::new(),
        });

        let row = TableRow::new()
            .with("Message", Text::new(event.message.as_deref().unwrap_or_default()))
            .with("Reason", Text::new(event.reason.as_deref().unwrap_or_default()))
            .with("Type", Text::new(event.type_.as_deref().unwrap_or_default()))
            .with("First Seen", timestamp(first_seen))
            .with("Last Seen", timestamp(last_seen))
            .with("From", Text::new(from.unwrap_or_default()))
            .with("Count", Text::new(event.count.unwrap_or(1).to_string()));
        table.add(row)?;
    }

    Ok(table)
}

fn involves(event: &Event, object: &ObjectRef) -> bool {
    let involved = &event.involved_object;
    match (&object.uid, &involved.uid) {
        (Some(uid), Some(involved_uid)) => uid == involved_uid,
        _ => {
            involved.kind.as_deref() == Some(object.kind.as_str())
                && involved.name.as_deref() == Some(object.name.as_str())
        },
    }
}
