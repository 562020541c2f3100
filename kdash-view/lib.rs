pub use self::action::{Action, Form, FormField, FormFieldKind};
pub use self::component::Component;
pub use self::containers::{ContainerDef, Containers};
pub use self::errors::ViewError;
pub use self::flex_layout::{FlexLayout, FlexLayoutItem, FlexLayoutSection, Width};
pub use self::list::List;
pub use self::quadrant::{Quadrant, QuadrantPosition, QuadrantValue};
pub use self::selectors::{ExpressionSelector, LabelSelector, Operator, Selector, Selectors};
pub use self::summary::{Summary, SummarySection, SummarySections};
pub use self::table::{Table, TableCol, TableRow, table_cols};
pub use self::text::{Labels, Link, Text, Timestamp};

mod action;
mod component;
mod containers;
mod errors;
mod flex_layout;
mod list;
mod quadrant;
mod selectors;
mod summary;
mod table;
mod text;
