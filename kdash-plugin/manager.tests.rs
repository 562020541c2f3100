use std::sync::Arc;

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::serde_json::Value;
use kdash_view::{SummarySection, Text};
use kube::core::TypeMeta;

use crate::{Capabilities, GroupVersionKind, Metadata, MetadataOnlyService, PluginService};

use super::*;

struct FakeService {
    header: &'static str,
    fail: bool,
}

#[async_trait]
impl PluginService for FakeService {
    async fn print(&self, _object: &DynamicObject) -> Result<PrintResponse, PluginError> {
        if self.fail {
            return Err(PluginError::Print {
                name: self.header.to_owned(),
                message: "boom".to_owned(),
            });
        }

        Ok(PrintResponse {
            config: vec![SummarySection::new(self.header, Text::new("value"))],
            ..Default::default()
        })
    }
}

fn deployment() -> DynamicObject {
    DynamicObject {
        types: Some(TypeMeta {
            api_version: "apps/v1".to_owned(),
            kind: "Deployment".to_owned(),
        }),
        metadata: ObjectMeta {
            name: Some("web".to_owned()),
            namespace: Some("default".to_owned()),
            ..Default::default()
        },
        data: Value::Null,
    }
}

fn metadata(name: &str, printer: &str) -> Metadata {
    Metadata {
        name: name.to_owned(),
        description: String::new(),
        capabilities: Capabilities {
            supports_printer_config: GroupVersionKind::parse(printer).into_iter().collect(),
            ..Default::default()
        },
    }
}

fn store_fake(store: &mut PluginStore, name: &'static str, printer: &str, fail: bool) {
    let service = Arc::new(FakeService { header: name, fail });
    store.store(name, service, metadata(name, printer), name).unwrap();
}

#[tokio::test]
async fn print_merges_supported_plugins_test() {
    let mut store = PluginStore::new();
    store_fake(&mut store, "second", "apps/v1/Deployment", false);
    store_fake(&mut store, "first", "apps/v1/Deployment", false);
    store_fake(&mut store, "other", "batch/v1/Job", true);

    let manager = DefaultPluginManager::new(store);
    let response = manager.print(&deployment()).await.unwrap();

    let headers = response.config.iter().map(|s| s.header.as_str()).collect::<Vec<_>>();
    assert_eq!(vec!["first", "second"], headers);
    assert!(response.status.is_empty());
    assert!(response.items.is_empty());
}

#[tokio::test]
async fn print_propagates_plugin_error_test() {
    let mut store = PluginStore::new();
    store_fake(&mut store, "broken", "apps/v1/Deployment", true);

    let manager = DefaultPluginManager::new(store);
    let result = manager.print(&deployment()).await;

    assert!(matches!(result, Err(PluginError::Print { .. })));
}

#[tokio::test]
async fn print_without_plugins_test() {
    let mut store = PluginStore::new();
    store
        .store("meta", Arc::new(MetadataOnlyService), metadata("meta", "apps/v1/Deployment"), "meta")
        .unwrap();

    let manager = DefaultPluginManager::new(store);
    let response = manager.print(&deployment()).await.unwrap();

    assert!(response.is_empty());
    assert_eq!(vec!["meta"], manager.store().names());
}
