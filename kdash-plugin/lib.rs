pub use self::capabilities::{Capabilities, GroupVersionKind};
pub use self::manager::{DefaultPluginManager, PluginManager};
pub use self::metadata::Metadata;
pub use self::response::PrintResponse;
pub use self::service::{MetadataOnlyService, PluginService};
pub use self::store::{PluginError, PluginStore};

mod capabilities;
mod manager;
mod metadata;
mod response;
mod service;
mod store;
