use kdash_view::{FlexLayoutItem, SummarySection};

/// Content contributed by plugins to the object summary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrintResponse {
    pub config: Vec<SummarySection>,
    pub status: Vec<SummarySection>,
    pub items: Vec<FlexLayoutItem>,
}

impl PrintResponse {
    /// Appends content of the `other` response.
    pub fn merge(&mut self, other: PrintResponse) {
        self.config.extend(other.config);
        self.status.extend(other.status);
        self.items.extend(other.items);
    }

    pub fn is_empty(&self) -> bool {
        self.config.is_empty() && self.status.is_empty() && self.items.is_empty()
    }
}
