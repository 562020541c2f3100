use async_trait::async_trait;
use kdash_kube::ObjectRef;
use kube::core::DynamicObject;

use crate::{PluginError, PluginStore, PrintResponse};

#[cfg(test)]
#[path = "./manager.tests.rs"]
mod manager_tests;

/// Gives printers access to the loaded plugins.
#[async_trait]
pub trait PluginManager: Send + Sync {
    /// Returns the store with all loaded plugins.
    fn store(&self) -> &PluginStore;

    /// Collects printer content from all plugins supporting the object type.
    async fn print(&self, object: &DynamicObject) -> Result<PrintResponse, PluginError>;
}

/// [`PluginManager`] that asks plugins one by one in name order.
pub struct DefaultPluginManager {
    store: PluginStore,
}

impl DefaultPluginManager {
    /// Creates new [`DefaultPluginManager`] instance.
    pub fn new(store: PluginStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PluginManager for DefaultPluginManager {
    fn store(&self) -> &PluginStore {
        &self.store
    }

    async fn print(&self, object: &DynamicObject) -> Result<PrintResponse, PluginError> {
        let object_ref = ObjectRef::from_dynamic(object);
        let mut response = PrintResponse::default();

        for name in self.store.names() {
            let supported = self
                .store
                .get_metadata(name)
                .is_some_and(|m| m.capabilities.has_printer(&object_ref.api_version, &object_ref.kind));
            if !supported {
                continue;
            }

            let Some(service) = self.store.get_service(name) else {
                continue;
            };

            tracing::debug!("plugin '{name}' prints {} {}", object_ref.kind, object_ref.name);
            response.merge(service.print(object).await?);
        }

        Ok(response)
    }
}
