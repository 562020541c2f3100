/// Possible errors when assembling view components.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ViewError {
    /// Table row references a column that the table does not have.
    #[error("table '{table}' has no column named '{column}'")]
    UnknownColumn { table: String, column: String },

    /// Item does not fit into the flex layout section.
    #[error("item of width {width} does not fit into section with {used} of 24 used")]
    SectionFull { width: u8, used: u8 },
}
