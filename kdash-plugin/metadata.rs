use serde::{Deserialize, Serialize};

use crate::Capabilities;

/// Plugin description reported during registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub capabilities: Capabilities,
}
