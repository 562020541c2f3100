use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::{
    Containers, FlexLayout, Labels, Link, List, Quadrant, Selector, Selectors, Summary, Table, Text, Timestamp,
};

#[cfg(test)]
#[path = "./component.tests.rs"]
mod component_tests;

/// View component that can be rendered by the UI.\
/// **Note** that each component serializes as `{"metadata": {"type", "title"}, "config": {..}}`.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Text(Text),
    Link(Link),
    Timestamp(Timestamp),
    Labels(Labels),
    Selectors(Selectors),
    Containers(Containers),
    List(List),
    Table(Table),
    Summary(Summary),
    Quadrant(Quadrant),
    FlexLayout(FlexLayout),
}

impl Component {
    /// Returns the component type name used in the serialized form.
    pub fn kind(&self) -> &'static str {
        match self {
            Component::Text(_) => "text",
            Component::Link(_) => "link",
            Component::Timestamp(_) => "timestamp",
            Component::Labels(_) => "labels",
            Component::Selectors(_) => "selectors",
            Component::Containers(_) => "containers",
            Component::List(_) => "list",
            Component::Table(_) => "table",
            Component::Summary(_) => "summary",
            Component::Quadrant(_) => "quadrant",
            Component::FlexLayout(_) => "flexlayout",
        }
    }

    /// Returns the component title if it has one.
    pub fn title(&self) -> Option<&str> {
        match self {
            Component::List(list) => list.title.as_deref(),
            Component::Table(table) => Some(&table.title),
            Component::Summary(summary) => Some(&summary.title),
            Component::Quadrant(quadrant) => Some(&quadrant.title),
            Component::FlexLayout(layout) => Some(&layout.title),
            _ => None,
        }
    }
}

impl Serialize for Component {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kind = self.kind();
        let title = self.title();
        match self {
            Component::Text(c) => envelope(serializer, kind, title, c),
            Component::Link(c) => envelope(serializer, kind, title, c),
            Component::Timestamp(c) => envelope(serializer, kind, title, c),
            Component::Labels(c) => envelope(serializer, kind, title, c),
            Component::Selectors(c) => envelope(serializer, kind, title, c),
            Component::Containers(c) => envelope(serializer, kind, title, c),
            Component::List(c) => envelope(serializer, kind, title, c),
            Component::Table(c) => envelope(serializer, kind, title, c),
            Component::Summary(c) => envelope(serializer, kind, title, c),
            Component::Quadrant(c) => envelope(serializer, kind, title, c),
            Component::FlexLayout(c) => envelope(serializer, kind, title, c),
        }
    }
}

impl Serialize for Selector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Selector::Label(config) => envelope(serializer, "labelSelector", None, config),
            Selector::Expression(config) => envelope(serializer, "expressionSelector", None, config),
        }
    }
}

pub(crate) fn envelope<S: Serializer, C: Serialize>(
    serializer: S,
    kind: &'static str,
    title: Option<&str>,
    config: &C,
) -> Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_struct("Component", 2)?;
    state.serialize_field("metadata", &Metadata { kind, title: title.map(|t| [Title(t)]) })?;
    state.serialize_field("config", config)?;
    state.end()
}

#[derive(Serialize)]
struct Metadata<'a> {
    #[serde(rename = "type")]
    kind: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<[Title<'a>; 1]>,
}

/// Title is serialized as a list with a single text component.
struct Title<'a>(&'a str);

impl Serialize for Title<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct TextConfig<'a> {
            value: &'a str,
        }

        envelope(serializer, "text", None, &TextConfig { value: self.0 })
    }
}

macro_rules! impl_from_component {
    ($($name:ident),* $(,)?) => {
        $(
            impl From<$name> for Component {
                fn from(value: $name) -> Self {
                    Component::$name(value)
                }
            }
        )*
    };
}

impl_from_component!(
    Text, Link, Timestamp, Labels, Selectors, Containers, List, Table, Summary, Quadrant, FlexLayout
);
