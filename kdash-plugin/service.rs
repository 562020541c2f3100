use async_trait::async_trait;
use kube::core::DynamicObject;

use crate::{PluginError, PrintResponse};

/// Running plugin able to contribute printer content.
#[async_trait]
pub trait PluginService: Send + Sync {
    /// Returns content for the object summary.
    async fn print(&self, object: &DynamicObject) -> Result<PrintResponse, PluginError>;
}

/// Service for plugins known only by their metadata, it never contributes content.
pub struct MetadataOnlyService;

#[async_trait]
impl PluginService for MetadataOnlyService {
    async fn print(&self, _object: &DynamicObject) -> Result<PrintResponse, PluginError> {
        Ok(PrintResponse::default())
    }
}
