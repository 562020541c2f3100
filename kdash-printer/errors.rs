use kdash_kube::{LinkError, StoreError};
use kdash_plugin::PluginError;
use kdash_view::ViewError;

/// Possible errors from printers and describers.
#[derive(thiserror::Error, Debug)]
pub enum PrintError {
    /// Required input was not provided.
    #[error("{0} is missing")]
    MissingInput(&'static str),

    /// There is no printer for the object type.
    #[error("cannot print {api_version} {kind}")]
    UnsupportedKind { api_version: String, kind: String },

    /// Object store query failed.
    #[error("object store error")]
    Store(#[from] StoreError),

    /// Link for an object could not be generated.
    #[error("link error")]
    Link(#[from] LinkError),

    /// Plugin failed to contribute its content.
    #[error("plugin error")]
    Plugin(#[from] PluginError),

    /// Components could not be assembled.
    #[error("view error")]
    View(#[from] ViewError),

    /// Value could not be serialized.
    #[error("conversion error")]
    Conversion(#[from] k8s_openapi::serde_json::Error),
}
