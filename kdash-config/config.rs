use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use crate::ConfigError;

#[cfg(test)]
#[path = "./config.tests.rs"]
mod config_tests;

pub const APP_NAME: &str = "kdash";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DEFAULT_NAMESPACE: &str = "default";
pub const DEFAULT_LINK_PREFIX: &str = "/overview";

/// Plugin declared in the configuration file.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PluginConfig {
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Command used to start the plugin.
    #[serde(default)]
    pub command: String,

    /// GVKs (`apiVersion/Kind`, e.g. `apps/v1/Deployment`) the plugin prints for.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub printer: Vec<String>,

    #[serde(default)]
    pub tab: bool,

    #[serde(default)]
    pub module: bool,
}

/// Application configuration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Namespace used when a manifest does not specify one.
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Prefix for all generated links.
    #[serde(default = "default_link_prefix")]
    pub link_prefix: String,

    #[serde(default = "default_true")]
    pub show_labels: bool,

    #[serde(default = "default_true")]
    pub events: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<PluginConfig>,
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_owned()
}

fn default_link_prefix() -> String {
    DEFAULT_LINK_PREFIX.to_owned()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            link_prefix: default_link_prefix(),
            show_labels: true,
            events: true,
            plugins: Vec::new(),
        }
    }
}

impl Config {
    /// Returns the default configuration path: `HOME/.kdash/config.yaml`.
    pub fn default_path() -> PathBuf {
        match std::env::home_dir() {
            Some(path) => path.join(format!(".{APP_NAME}")).join("config.yaml"),
            None => PathBuf::from("config.yaml"),
        }
    }

    /// Parses configuration from the YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads configuration from the specified file.
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut file = File::open(path).await?;
        let mut config_str = String::new();
        file.read_to_string(&mut config_str).await?;

        Self::from_yaml(&config_str)
    }

    /// Saves configuration to the specified file.
    pub async fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let config_str = serde_yaml::to_string(self)?;
        let mut file = File::create(path).await?;
        file.write_all(config_str.as_bytes()).await?;
        file.flush().await?;

        Ok(())
    }

    /// Loads the configuration from a file or creates a default one if the file does not exist.
    pub async fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            return Self::load(path).await;
        }

        tracing::info!("creating default configuration at {}", path.display());
        let config = Self::default();
        config.save(path).await?;

        Ok(config)
    }
}
