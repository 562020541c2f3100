use kdash_kube::split_api_version;
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "./capabilities.tests.rs"]
mod capabilities_tests;

/// Kubernetes group, version and kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupVersionKind {
    pub group: String,
    pub version: String,
    pub kind: String,
}

impl GroupVersionKind {
    /// Creates new [`GroupVersionKind`] instance from `api_version` and `kind`.
    pub fn new(api_version: &str, kind: &str) -> Self {
        let (group, version) = split_api_version(api_version);
        Self {
            group: group.to_owned(),
            version: version.to_owned(),
            kind: kind.to_owned(),
        }
    }

    /// Parses `group/version/Kind` or `version/Kind` string.
    pub fn parse(value: &str) -> Option<Self> {
        let (api_version, kind) = value.rsplit_once('/')?;
        if api_version.is_empty() || kind.is_empty() {
            return None;
        }

        Some(Self::new(api_version, kind))
    }

    /// Returns `true` if this is the `api_version` and `kind`.
    pub fn is(&self, api_version: &str, kind: &str) -> bool {
        let (group, version) = split_api_version(api_version);
        self.group == group && self.version == version && self.kind == kind
    }
}

/// Describes what a plugin is able to do.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    #[serde(default)]
    pub supports_printer_config: Vec<GroupVersionKind>,

    #[serde(default)]
    pub supports_printer_status: Vec<GroupVersionKind>,

    #[serde(default)]
    pub supports_printer_items: Vec<GroupVersionKind>,

    #[serde(default)]
    pub supports_object_status: Vec<GroupVersionKind>,

    #[serde(default)]
    pub supports_tab: Vec<GroupVersionKind>,

    #[serde(default)]
    pub is_module: bool,

    #[serde(default)]
    pub action_names: Vec<String>,
}

impl Capabilities {
    /// Returns `true` if plugin contributes printer content of any kind for the object type.
    pub fn has_printer(&self, api_version: &str, kind: &str) -> bool {
        [
            &self.supports_printer_config,
            &self.supports_printer_status,
            &self.supports_printer_items,
        ]
        .into_iter()
        .flatten()
        .any(|gvk| gvk.is(api_version, kind))
    }
}
