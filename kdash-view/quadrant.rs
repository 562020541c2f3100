use serde::Serialize;

/// Position in the [`Quadrant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadrantPosition {
    NW,
    NE,
    SW,
    SE,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuadrantValue {
    pub label: String,
    pub value: String,
}

/// Four labelled values shown in a 2x2 grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Quadrant {
    #[serde(skip)]
    pub title: String,

    pub nw: QuadrantValue,
    pub ne: QuadrantValue,
    pub sw: QuadrantValue,
    pub se: QuadrantValue,
}

impl Quadrant {
    /// Creates new empty [`Quadrant`] instance.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Sets label and value for the given position.
    pub fn set(&mut self, position: QuadrantPosition, label: impl Into<String>, value: impl Into<String>) {
        let value = QuadrantValue {
            label: label.into(),
            value: value.into(),
        };

        match position {
            QuadrantPosition::NW => self.nw = value,
            QuadrantPosition::NE => self.ne = value,
            QuadrantPosition::SW => self.sw = value,
            QuadrantPosition::SE => self.se = value,
        }
    }
}
