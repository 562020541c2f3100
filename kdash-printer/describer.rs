use k8s_openapi::serde_json;
use kdash_view::{Component, List, Table, TableRow, Text, table_cols};
use serde::Serialize;
use tracing::debug;

use crate::{PrintError, PrintOptions};

#[cfg(test)]
#[path = "./describer.tests.rs"]
mod describer_tests;

pub const PLUGIN_COLUMNS: [&str; 3] = ["Name", "Description", "Capabilities"];

/// Titled set of components produced by a describer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentResponse {
    pub title: String,
    pub components: Vec<Component>,
}

/// Describes plugins registered in the plugin manager.
#[derive(Default)]
pub struct PluginListDescriber;

impl PluginListDescriber {
    /// Creates new [`PluginListDescriber`] instance.
    pub fn new() -> Self {
        Self
    }

    /// Returns "Plugins" content with one table row per registered plugin, ordered by the store key.
    pub fn describe(&self, path: &str, namespace: &str, options: &PrintOptions) -> Result<ContentResponse, PrintError> {
        let store = options.plugins.store();
        debug!("describing {} plugins for '{path}' in '{namespace}'", store.len());

        let mut table = Table::new("Plugins", "", table_cols(&PLUGIN_COLUMNS));
        for name in store.names() {
            let Some(metadata) = store.get_metadata(name) else {
                continue;
            };

            let row = TableRow::new()
                .with("Name", Text::new(name))
                .with("Description", Text::new(&metadata.description))
                .with("Capabilities", Text::new(serde_json::to_string(&metadata.capabilities)?));
            table.add(row)?;
        }

        Ok(ContentResponse {
            title: "Plugins".to_owned(),
            components: vec![List::new("Plugins", vec![table.into()]).into()],
        })
    }
}
