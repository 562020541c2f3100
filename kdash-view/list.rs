use serde::Serialize;

use crate::Component;

/// Ordered list of components.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct List {
    #[serde(skip)]
    pub title: Option<String>,

    pub items: Vec<Component>,
}

impl List {
    /// Creates new [`List`] instance. Empty `title` means the list has no title.
    pub fn new(title: &str, items: Vec<Component>) -> Self {
        Self {
            title: (!title.is_empty()).then(|| title.to_owned()),
            items,
        }
    }

    /// Adds component to the end of the list.
    pub fn add(&mut self, item: impl Into<Component>) {
        self.items.push(item.into());
    }
}
