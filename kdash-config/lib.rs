pub use self::config::{APP_NAME, APP_VERSION, Config, DEFAULT_LINK_PREFIX, DEFAULT_NAMESPACE, PluginConfig};
pub use self::errors::ConfigError;

mod config;
mod errors;
