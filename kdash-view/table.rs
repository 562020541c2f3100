use serde::Serialize;
use std::collections::BTreeMap;

use crate::{Component, ViewError};

#[cfg(test)]
#[path = "./table.tests.rs"]
mod table_tests;

/// Table column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableCol {
    pub name: String,
    pub accessor: String,
}

/// Creates table columns from names, each column is accessed by its name.
pub fn table_cols(names: &[&str]) -> Vec<TableCol> {
    names
        .iter()
        .map(|name| TableCol {
            name: (*name).to_owned(),
            accessor: (*name).to_owned(),
        })
        .collect()
}

/// Table row: column accessor to cell content.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableRow(BTreeMap<String, Component>);

impl TableRow {
    /// Creates new empty [`TableRow`] instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets cell content and returns the row.
    pub fn with(mut self, column: impl Into<String>, content: impl Into<Component>) -> Self {
        self.insert(column, content);
        self
    }

    /// Sets cell content.
    pub fn insert(&mut self, column: impl Into<String>, content: impl Into<Component>) {
        self.0.insert(column.into(), content.into());
    }

    /// Returns cell content for the column.
    pub fn get(&self, column: &str) -> Option<&Component> {
        self.0.get(column)
    }

    /// Returns column accessors used by this row.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Titled table with columns and rows kept in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    #[serde(skip)]
    pub title: String,

    columns: Vec<TableCol>,
    rows: Vec<TableRow>,
    empty_content: String,
}

impl Table {
    /// Creates new [`Table`] instance without rows.
    pub fn new(title: impl Into<String>, empty_content: impl Into<String>, columns: Vec<TableCol>) -> Self {
        Self {
            title: title.into(),
            columns,
            rows: Vec::new(),
            empty_content: empty_content.into(),
        }
    }

    /// Creates new [`Table`] instance with the given rows.
    pub fn with_rows(
        title: impl Into<String>,
        empty_content: impl Into<String>,
        columns: Vec<TableCol>,
        rows: Vec<TableRow>,
    ) -> Result<Self, ViewError> {
        let mut table = Self::new(title, empty_content, columns);
        for row in rows {
            table.add(row)?;
        }

        Ok(table)
    }

    /// Adds row to the end of the table.\
    /// **Note** that every cell must belong to one of the table columns.
    pub fn add(&mut self, row: TableRow) -> Result<(), ViewError> {
        if let Some(column) = row.columns().find(|c| !self.has_column(c)) {
            return Err(ViewError::UnknownColumn {
                table: self.title.clone(),
                column: column.to_owned(),
            });
        }

        self.rows.push(row);
        Ok(())
    }

    /// Returns `true` if the table has column with the given accessor.
    pub fn has_column(&self, accessor: &str) -> bool {
        self.columns.iter().any(|c| c.accessor == accessor)
    }

    pub fn columns(&self) -> &[TableCol] {
        &self.columns
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn empty_content(&self) -> &str {
        &self.empty_content
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
