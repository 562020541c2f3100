use serde::{Serialize, Serializer};

use crate::{Component, ViewError};

#[cfg(test)]
#[path = "./flex_layout.tests.rs"]
mod flex_layout_tests;

const SECTION_WIDTH: u8 = 24;

/// Width of the item in the flex layout, in 1/24 units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    Quarter,
    Third,
    Half,
    Full,
}

impl Width {
    pub fn value(self) -> u8 {
        match self {
            Width::Quarter => 6,
            Width::Third => 8,
            Width::Half => 12,
            Width::Full => SECTION_WIDTH,
        }
    }
}

impl Serialize for Width {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.value())
    }
}

/// Component placed in the flex layout section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlexLayoutItem {
    pub width: Width,
    pub view: Component,
}

impl FlexLayoutItem {
    /// Creates new [`FlexLayoutItem`] instance.
    pub fn new(view: impl Into<Component>, width: Width) -> Self {
        Self {
            width,
            view: view.into(),
        }
    }
}

/// Row of items which widths sum to at most 24.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FlexLayoutSection(Vec<FlexLayoutItem>);

impl FlexLayoutSection {
    /// Adds component to the section.
    pub fn add(&mut self, view: impl Into<Component>, width: Width) -> Result<(), ViewError> {
        self.add_item(FlexLayoutItem::new(view, width))
    }

    /// Adds item to the section if there is enough room for it.
    pub fn add_item(&mut self, item: FlexLayoutItem) -> Result<(), ViewError> {
        let used = self.used();
        if !fits(used, item.width) {
            return Err(ViewError::SectionFull {
                width: item.width.value(),
                used,
            });
        }

        self.0.push(item);
        Ok(())
    }

    /// Returns width already taken by the items.
    pub fn used(&self) -> u8 {
        self.0.iter().map(|i| i.width.value()).sum()
    }

    pub fn items(&self) -> &[FlexLayoutItem] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Layout made of sections stacked vertically.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FlexLayout {
    #[serde(skip)]
    pub title: String,

    sections: Vec<FlexLayoutSection>,
}

impl FlexLayout {
    /// Creates new empty [`FlexLayout`] instance.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
        }
    }

    /// Adds new empty section and returns it.
    pub fn add_section(&mut self) -> &mut FlexLayoutSection {
        self.sections.push(FlexLayoutSection::default());
        let last = self.sections.len() - 1;
        &mut self.sections[last]
    }

    /// Places items into new sections, starting another one whenever the next item does not fit.
    pub fn pack(&mut self, items: impl IntoIterator<Item = FlexLayoutItem>) {
        let mut current = FlexLayoutSection::default();
        for item in items {
            if !fits(current.used(), item.width) {
                self.sections.push(std::mem::take(&mut current));
            }

            current.0.push(item);
        }

        if !current.is_empty() {
            self.sections.push(current);
        }
    }

    /// Removes sections without items.
    pub fn compact(&mut self) {
        self.sections.retain(|s| !s.is_empty());
    }

    pub fn sections(&self) -> &[FlexLayoutSection] {
        &self.sections
    }
}

fn fits(used: u8, width: Width) -> bool {
    used.saturating_add(width.value()) <= SECTION_WIDTH
}
