use k8s_openapi::chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Plain text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    pub value: String,
}

impl Text {
    /// Creates new [`Text`] instance.
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }
}

/// Text that points to another view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub value: String,

    #[serde(rename = "ref")]
    pub reference: String,
}

impl Link {
    /// Creates new [`Link`] instance.
    pub fn new(value: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            reference: reference.into(),
        }
    }
}

/// Point in time, serialized as unix seconds so the UI can render it relative to now.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Timestamp {
    #[serde(serialize_with = "as_unix_seconds")]
    pub timestamp: DateTime<Utc>,
}

impl Timestamp {
    /// Creates new [`Timestamp`] instance.
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self { timestamp }
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self::new(value)
    }
}

fn as_unix_seconds<S: Serializer>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_i64(timestamp.timestamp())
}

/// Kubernetes labels.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Labels {
    pub labels: BTreeMap<String, String>,
}

impl Labels {
    /// Creates new [`Labels`] instance.
    pub fn new(labels: BTreeMap<String, String>) -> Self {
        Self { labels }
    }
}

impl From<Option<&BTreeMap<String, String>>> for Labels {
    fn from(value: Option<&BTreeMap<String, String>>) -> Self {
        Self::new(value.cloned().unwrap_or_default())
    }
}
