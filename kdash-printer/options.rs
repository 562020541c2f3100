use kdash_kube::{LinkGenerator, ObjectStore};
use kdash_plugin::PluginManager;
use std::sync::Arc;

/// Collaborators and switches shared by all printers.
#[derive(Clone)]
pub struct PrintOptions {
    pub store: Arc<dyn ObjectStore>,
    pub link: Arc<dyn LinkGenerator>,
    pub plugins: Arc<dyn PluginManager>,
    pub disable_labels: bool,
    pub enable_events: bool,
}

impl PrintOptions {
    /// Creates new [`PrintOptions`] instance with labels and events enabled.
    pub fn new(store: Arc<dyn ObjectStore>, link: Arc<dyn LinkGenerator>, plugins: Arc<dyn PluginManager>) -> Self {
        Self {
            store,
            link,
            plugins,
            disable_labels: false,
            enable_events: true,
        }
    }

    /// Returns copy of the options with the `Labels` column turned off.
    pub fn without_labels(&self) -> Self {
        Self {
            disable_labels: true,
            ..self.clone()
        }
    }
}
