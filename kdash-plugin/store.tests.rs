use crate::MetadataOnlyService;

use super::*;

fn metadata(name: &str) -> Metadata {
    Metadata {
        name: name.to_owned(),
        description: format!("{name} plugin"),
        ..Default::default()
    }
}

#[test]
fn store_test() {
    let mut store = PluginStore::new();
    store
        .store("zeta", Arc::new(MetadataOnlyService), metadata("zeta"), "zeta-cmd")
        .unwrap();
    store
        .store("alpha", Arc::new(MetadataOnlyService), metadata("alpha"), "alpha-cmd")
        .unwrap();

    assert_eq!(vec!["alpha", "zeta"], store.names());
    assert_eq!(Some("zeta-cmd"), store.get_command("zeta"));
    assert_eq!(Some("alpha plugin"), store.get_metadata("alpha").map(|m| m.description.as_str()));
    assert!(store.get_service("alpha").is_some());
    assert!(store.get_metadata("missing").is_none());
    assert_eq!(
        vec!["alpha", "zeta"],
        store.metadata().map(|m| m.name.as_str()).collect::<Vec<_>>()
    );
}

#[test]
fn store_replaces_plugin_test() {
    let mut store = PluginStore::new();
    store.store("a", Arc::new(MetadataOnlyService), metadata("a"), "v1").unwrap();
    store.store("a", Arc::new(MetadataOnlyService), metadata("a"), "v2").unwrap();

    assert_eq!(1, store.len());
    assert_eq!(Some("v2"), store.get_command("a"));
}

#[test]
fn store_rejects_empty_name_test() {
    let mut store = PluginStore::new();
    let result = store.store("", Arc::new(MetadataOnlyService), metadata(""), "cmd");

    assert!(matches!(result, Err(PluginError::EmptyName)));
    assert!(store.is_empty());
}
