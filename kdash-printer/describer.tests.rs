use kdash_plugin::{Capabilities, DefaultPluginManager, GroupVersionKind, Metadata, MetadataOnlyService, PluginStore};
use std::sync::Arc;

use crate::testing::options;

use super::*;

fn plugin(name: &str, description: &str, capabilities: Capabilities) -> Metadata {
    Metadata {
        name: name.to_owned(),
        description: description.to_owned(),
        capabilities,
    }
}

fn options_with(plugins: Vec<Metadata>) -> PrintOptions {
    let mut store = PluginStore::new();
    for metadata in plugins {
        let name = metadata.name.clone();
        store
            .store(&name, Arc::new(MetadataOnlyService), metadata, "/usr/bin/plugin")
            .unwrap();
    }

    PrintOptions {
        plugins: Arc::new(DefaultPluginManager::new(store)),
        ..options(Vec::new())
    }
}

#[test]
fn describe_plugins_test() {
    let capabilities = Capabilities {
        supports_printer_config: vec![GroupVersionKind::new("apps/v1", "Deployment")],
        ..Default::default()
    };
    let options = options_with(vec![
        plugin("zeta", "Second plugin", Capabilities::default()),
        plugin("alpha", "First plugin", capabilities.clone()),
    ]);

    let response = PluginListDescriber::new().describe("/plugins", "default", &options).unwrap();

    let table = Table::with_rows(
        "Plugins",
        "",
        table_cols(&PLUGIN_COLUMNS),
        vec![
            TableRow::new()
                .with("Name", Text::new("alpha"))
                .with("Description", Text::new("First plugin"))
                .with("Capabilities", Text::new(serde_json::to_string(&capabilities).unwrap())),
            TableRow::new()
                .with("Name", Text::new("zeta"))
                .with("Description", Text::new("Second plugin"))
                .with("Capabilities", Text::new(serde_json::to_string(&Capabilities::default()).unwrap())),
        ],
    )
    .unwrap();
    let expected = ContentResponse {
        title: "Plugins".to_owned(),
        components: vec![List::new("Plugins", vec![table.into()]).into()],
    };
    assert_eq!(expected, response);
}

#[test]
fn describe_no_plugins_test() {
    let response = PluginListDescriber::new()
        .describe("/plugins", "default", &options(Vec::new()))
        .unwrap();

    let Component::List(list) = &response.components[0] else {
        panic!("expected plugins list");
    };
    let Component::Table(table) = &list.items[0] else {
        panic!("expected plugins table");
    };
    assert!(table.is_empty());
    assert_eq!("", table.empty_content());
}

#[test]
fn describe_uses_store_key_test() {
    let metadata = plugin("renamed", "Beta plugin", Capabilities::default());
    let mut store = PluginStore::new();
    store.store("beta", Arc::new(MetadataOnlyService), metadata, "").unwrap();
    let options = PrintOptions {
        plugins: Arc::new(DefaultPluginManager::new(store)),
        ..options(Vec::new())
    };

    let response = PluginListDescriber::new().describe("/plugins", "default", &options).unwrap();

    let Component::List(list) = &response.components[0] else {
        panic!("expected plugins list");
    };
    let Component::Table(table) = &list.items[0] else {
        panic!("expected plugins table");
    };
    assert_eq!(Some(&Component::Text(Text::new("beta"))), table.rows()[0].get("Name"));
}
