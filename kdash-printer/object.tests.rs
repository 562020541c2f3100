use async_trait::async_trait;
use k8s_openapi::api::core::v1::{ConfigMap, ContainerPort, EventSource, ObjectReference, PodSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::OwnerReference;
use kdash_plugin::{
    Capabilities, DefaultPluginManager, GroupVersionKind, Metadata, PluginError, PluginService, PluginStore,
    PrintResponse,
};
use kdash_view::SummarySection;
use std::sync::Arc;

use crate::testing::{created, dynamic, labels, link, metadata, options};

use super::*;

fn config_map() -> ConfigMap {
    let mut meta = metadata("settings", "default");
    meta.labels = Some(labels(&[("app", "web")]));
    meta.owner_references = Some(vec![OwnerReference {
        api_version: "apps/v1".to_owned(),
        kind: "Deployment".to_owned(),
        name: "web".to_owned(),
        uid: "web-uid".to_owned(),
        controller: Some(true),
        ..Default::default()
    }]);

    ConfigMap {
        metadata: meta,
        ..Default::default()
    }
}

fn event(name: &str, uid: &str, message: &str) -> Event {
    Event {
        metadata: metadata(name, "default"),
        involved_object: ObjectReference {
            kind: Some("ConfigMap".to_owned()),
            name: Some("settings".to_owned()),
            uid: Some(uid.to_owned()),
            ..Default::default()
        },
        message: Some(message.to_owned()),
        reason: Some("Updated".to_owned()),
        type_: Some("Normal".to_owned()),
        source: Some(EventSource {
            component: Some("kubelet".to_owned()),
            host: Some("node-a".to_owned()),
        }),
        count: Some(2),
        ..Default::default()
    }
}

fn summary(title: &str) -> Summary {
    let mut sections = SummarySections::new();
    sections.add_text("Key", title);
    Summary::new(title, sections)
}

async fn item(title: &'static str) -> Result<Summary, PrintError> {
    Ok(summary(title))
}

fn titles(component: &Component) -> Vec<Vec<String>> {
    let Component::FlexLayout(layout) = component else {
        panic!("expected flex layout");
    };

    layout
        .sections()
        .iter()
        .map(|s| s.items().iter().map(|i| i.view.title().unwrap_or_default().to_owned()).collect())
        .collect()
}

#[tokio::test]
async fn to_component_sections_order_test() {
    let object = config_map();
    let options = options(vec![
        dynamic(&event("e1", "settings-uid", "first")),
        dynamic(&event("e2", "other-uid", "second")),
    ]);

    let mut builder = Object::new(&object).unwrap();
    builder.register_config(summary("Configuration"));
    builder.register_summary(summary("Status"));
    builder.register_items(ItemDescriptor::new(Width::Half, item("Left")));
    builder.register_items(ItemDescriptor::new(Width::Half, item("Right")));
    builder.register_items(ItemDescriptor::new(Width::Full, item("Wide")));
    builder.enable_events();

    let component = builder.to_component(&options).await.unwrap();

    assert_eq!(Some("Summary"), component.title());
    assert_eq!(
        vec![
            vec!["Configuration", "Status"],
            vec!["Metadata"],
            vec!["Left", "Right"],
            vec!["Wide"],
            vec!["Events"],
        ],
        titles(&component)
    );

    let Component::FlexLayout(layout) = &component else {
        unreachable!()
    };
    let Component::Table(events) = &layout.sections()[4].items()[0].view else {
        panic!("expected events table");
    };
    assert_eq!(1, events.rows().len());
    assert_eq!(Some(&Component::Text(Text::new("first"))), events.rows()[0].get("Message"));
    assert_eq!(Some(&Component::Text(Text::new("kubelet on node-a"))), events.rows()[0].get("From"));
    assert_eq!(Some(&Component::Text(Text::new("2"))), events.rows()[0].get("Count"));
}

#[tokio::test]
async fn to_component_events_disabled_test() {
    let object = config_map();
    let mut options = options(vec![dynamic(&event("e1", "settings-uid", "first"))]);
    options.enable_events = false;

    let mut builder = Object::new(&object).unwrap();
    builder.enable_events();

    let component = builder.to_component(&options).await.unwrap();

    assert_eq!(vec![vec!["Metadata"]], titles(&component));
}

#[tokio::test]
async fn to_component_pod_template_test() {
    let object = config_map();
    let template = PodTemplateSpec {
        metadata: Some(ObjectMeta {
            labels: Some(labels(&[("app", "web")])),
            ..Default::default()
        }),
        spec: Some(PodSpec {
            containers: vec![Container {
                name: "nginx".to_owned(),
                image: Some("nginx:1.15".to_owned()),
                ports: Some(vec![ContainerPort {
                    container_port: 80,
                    ..Default::default()
                }]),
                args: Some(vec!["-g".to_owned(), "daemon off;".to_owned()]),
                env: Some(vec![EnvVar {
                    name: "MODE".to_owned(),
                    value: Some("prod".to_owned()),
                    ..Default::default()
                }]),
                ..Default::default()
            }],
            ..Default::default()
        }),
    };

    let mut builder = Object::new(&object).unwrap();
    builder.enable_pod_template(&template);

    let component = builder.to_component(&options(Vec::new())).await.unwrap();

    assert_eq!(
        vec![vec!["Metadata"], vec!["Pod Template"], vec!["Container nginx"]],
        titles(&component)
    );

    let Component::FlexLayout(layout) = &component else {
        unreachable!()
    };
    let Component::Summary(container) = &layout.sections()[2].items()[0].view else {
        panic!("expected container summary");
    };
    let headers = container.sections.iter().map(|s| s.header.as_str()).collect::<Vec<_>>();
    assert_eq!(vec!["Image", "Ports", "Args", "Environment"], headers);
    assert_eq!(Component::Text(Text::new("80/TCP")), container.sections[1].content);
}

#[tokio::test]
async fn metadata_summary_test() {
    let object = config_map();
    let options = options(Vec::new());

    let summary = metadata_summary(&ObjectRef::from_resource(&object), &object.metadata, &options).unwrap();

    let expected = Summary::new(
        "Metadata",
        vec![
            SummarySection::new("Age", timestamp(Some(&created()))),
            SummarySection::new("Labels", Labels::new(labels(&[("app", "web")]))),
            SummarySection::new("Controlled By", link("default", "workloads/deployments", "web")),
        ],
    );
    assert_eq!(expected, summary);
}

struct ConfigPlugin;

#[async_trait]
impl PluginService for ConfigPlugin {
    async fn print(&self, _object: &DynamicObject) -> Result<PrintResponse, PluginError> {
        Ok(PrintResponse {
            config: vec![SummarySection::new("Plugin Key", Text::new("plugin value"))],
            status: Vec::new(),
            items: vec![FlexLayoutItem::new(summary("Plugin Item"), Width::Full)],
        })
    }
}

#[tokio::test]
async fn to_component_plugin_content_test() {
    let mut store = PluginStore::new();
    let metadata = Metadata {
        name: "extras".to_owned(),
        description: String::new(),
        capabilities: Capabilities {
            supports_printer_config: vec![GroupVersionKind::new("v1", "ConfigMap")],
            ..Default::default()
        },
    };
    store.store("extras", Arc::new(ConfigPlugin), metadata, "extras").unwrap();
    let options = PrintOptions {
        plugins: Arc::new(DefaultPluginManager::new(store)),
        ..options(Vec::new())
    };

    let mut builder = Object::new(&config_map()).unwrap();
    builder.register_items(ItemDescriptor::new(Width::Full, item("Own Item")));

    let component = builder.to_component(&options).await.unwrap();

    assert_eq!(
        vec![vec!["Configuration"], vec!["Metadata"], vec!["Own Item"], vec!["Plugin Item"]],
        titles(&component)
    );
}
