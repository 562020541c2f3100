use std::collections::BTreeMap;
use std::sync::Arc;

use crate::{Metadata, PluginService};

#[cfg(test)]
#[path = "./store.tests.rs"]
mod store_tests;

/// Possible errors from plugins.
#[derive(thiserror::Error, Debug)]
pub enum PluginError {
    /// Plugin cannot be stored without a name.
    #[error("plugin name cannot be empty")]
    EmptyName,

    /// Plugin failed to print the object.
    #[error("plugin '{name}' failed to print: {message}")]
    Print { name: String, message: String },
}

struct StoredPlugin {
    service: Arc<dyn PluginService>,
    metadata: Metadata,
    command: String,
}

/// Registry of loaded plugins ordered by name.
#[derive(Default)]
pub struct PluginStore {
    plugins: BTreeMap<String, StoredPlugin>,
}

impl PluginStore {
    /// Creates new empty [`PluginStore`] instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the plugin, replacing the one already stored under the same `name`.
    pub fn store(
        &mut self,
        name: &str,
        service: Arc<dyn PluginService>,
        metadata: Metadata,
        command: &str,
    ) -> Result<(), PluginError> {
        if name.is_empty() {
            return Err(PluginError::EmptyName);
        }

        let previous = self.plugins.insert(
            name.to_owned(),
            StoredPlugin {
                service,
                metadata,
                command: command.to_owned(),
            },
        );

        if previous.is_some() {
            tracing::warn!("plugin '{name}' was replaced");
        }

        Ok(())
    }

    /// Returns sorted names of the stored plugins.
    pub fn names(&self) -> Vec<&str> {
        self.plugins.keys().map(String::as_str).collect()
    }

    pub fn get_metadata(&self, name: &str) -> Option<&Metadata> {
        self.plugins.get(name).map(|p| &p.metadata)
    }

    pub fn get_service(&self, name: &str) -> Option<Arc<dyn PluginService>> {
        self.plugins.get(name).map(|p| Arc::clone(&p.service))
    }

    pub fn get_command(&self, name: &str) -> Option<&str> {
        self.plugins.get(name).map(|p| p.command.as_str())
    }

    /// Returns metadata of all stored plugins in name order.
    pub fn metadata(&self) -> impl Iterator<Item = &Metadata> {
        self.plugins.values().map(|p| &p.metadata)
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}
