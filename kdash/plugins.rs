use kdash_config::PluginConfig;
use kdash_plugin::{Capabilities, GroupVersionKind, Metadata, MetadataOnlyService, PluginError, PluginStore};
use std::sync::Arc;
use tracing::warn;

#[cfg(test)]
#[path = "./plugins.tests.rs"]
mod plugins_tests;

/// Builds plugin store from the plugins declared in the configuration.\
/// **Note** that declared plugins contribute only their metadata.
pub fn plugin_store(plugins: &[PluginConfig]) -> Result<PluginStore, PluginError> {
    let mut store = PluginStore::new();
    for plugin in plugins {
        store.store(&plugin.name, Arc::new(MetadataOnlyService), metadata(plugin), &plugin.command)?;
    }

    Ok(store)
}

fn metadata(plugin: &PluginConfig) -> Metadata {
    let printer = plugin
        .printer
        .iter()
        .filter_map(|gvk| {
            let parsed = GroupVersionKind::parse(gvk);
            if parsed.is_none() {
                warn!("ignoring invalid printer '{gvk}' of plugin '{}'", plugin.name);
            }

            parsed
        })
        .collect::<Vec<_>>();

    Metadata {
        name: plugin.name.clone(),
        description: plugin.description.clone(),
        capabilities: Capabilities {
            supports_printer_config: printer.clone(),
            supports_printer_status: printer.clone(),
            supports_printer_items: printer.clone(),
            supports_tab: if plugin.tab { printer } else { Vec::new() },
            is_module: plugin.module,
            ..Default::default()
        },
    }
}
