use serde::Serialize;

use crate::{Action, Component, Text};

/// Single header and content pair of the [`Summary`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummarySection {
    pub header: String,
    pub content: Component,
}

impl SummarySection {
    /// Creates new [`SummarySection`] instance.
    pub fn new(header: impl Into<String>, content: impl Into<Component>) -> Self {
        Self {
            header: header.into(),
            content: content.into(),
        }
    }
}

/// Ordered collection of [`SummarySection`]s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummarySections(Vec<SummarySection>);

impl SummarySections {
    /// Creates new empty [`SummarySections`] instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a section with the given content.
    pub fn add(&mut self, header: impl Into<String>, content: impl Into<Component>) {
        self.0.push(SummarySection::new(header, content));
    }

    /// Adds a section with text content.
    pub fn add_text(&mut self, header: impl Into<String>, text: impl Into<String>) {
        self.add(header, Text::new(text));
    }

    /// Appends all sections from the iterator.
    pub fn extend(&mut self, sections: impl IntoIterator<Item = SummarySection>) {
        self.0.extend(sections);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<SummarySections> for Vec<SummarySection> {
    fn from(value: SummarySections) -> Self {
        value.0
    }
}

impl From<Vec<SummarySection>> for SummarySections {
    fn from(value: Vec<SummarySection>) -> Self {
        Self(value)
    }
}

impl IntoIterator for SummarySections {
    type Item = SummarySection;
    type IntoIter = std::vec::IntoIter<SummarySection>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Titled list of header/content sections, optionally with actions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    #[serde(skip)]
    pub title: String,

    pub sections: Vec<SummarySection>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Action>,
}

impl Summary {
    /// Creates new [`Summary`] instance.
    pub fn new(title: impl Into<String>, sections: impl Into<Vec<SummarySection>>) -> Self {
        Self {
            title: title.into(),
            sections: sections.into(),
            actions: Vec::new(),
        }
    }

    /// Appends sections to the summary.
    pub fn add(&mut self, sections: impl IntoIterator<Item = SummarySection>) {
        self.sections.extend(sections);
    }

    /// Adds action to the summary.
    pub fn add_action(&mut self, action: Action) {
        self.actions.push(action);
    }
}
