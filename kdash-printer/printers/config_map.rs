use k8s_openapi::api::core::v1::ConfigMap;
use kdash_view::{Component, Summary, SummarySections, Table, TableRow, Text, Width, table_cols};
use kube::ResourceExt;

use crate::utils::{list_columns, list_row, timestamp};
use crate::{ItemDescriptor, Object, PrintError, PrintOptions};

#[cfg(test)]
#[path = "./config_map.tests.rs"]
mod config_map_tests;

pub const CONFIG_MAP_COLUMNS: [&str; 4] = ["Name", "Labels", "Data", "Age"];

const BINARY_DATA: &str = "<binary data>";

/// Creates "ConfigMaps" table.
pub fn config_map_list_handler(list: Option<&[ConfigMap]>, options: &PrintOptions) -> Result<Table, PrintError> {
    let list = list.ok_or(PrintError::MissingInput("config map list"))?;
    let mut table = Table::new(
        "ConfigMaps",
        "We couldn't find any config maps!",
        list_columns(&CONFIG_MAP_COLUMNS, options),
    );

    for config_map in list {
        let entries = config_map.data.as_ref().map_or(0, |d| d.len())
            + config_map.binary_data.as_ref().map_or(0, |d| d.len());
        let row = list_row(config_map, options)?
            .with("Data", Text::new(entries.to_string()))
            .with("Age", timestamp(config_map.creation_timestamp().as_ref()));
        table.add(row)?;
    }

    Ok(table)
}

/// Prints the config map summary with its configuration and data.
pub async fn config_map_handler(
    config_map: Option<&ConfigMap>,
    options: &PrintOptions,
) -> Result<Component, PrintError> {
    let config_map = config_map.ok_or(PrintError::MissingInput("config map"))?;
    let mut object = Object::new(config_map)?;

    object.register_config(describe_config_map_config(Some(config_map))?);
    object.register_items(ItemDescriptor::new(Width::Full, async move { describe_config_map_data(config_map) }));

    object.to_component(options).await
}

/// Creates "Configuration" summary of the config map.
pub fn describe_config_map_config(config_map: Option<&ConfigMap>) -> Result<Summary, PrintError> {
    let config_map = config_map.ok_or(PrintError::MissingInput("config map"))?;
    let mut sections = SummarySections::new();
    sections.add("Age", timestamp(config_map.creation_timestamp().as_ref()));

    Ok(Summary::new("Configuration", sections))
}

/// Creates "Data" table with config map entries, binary entries are not shown.
pub fn describe_config_map_data(config_map: &ConfigMap) -> Result<Table, PrintError> {
    let mut table = Table::new("Data", "This config map has no data!", table_cols(&["Key", "Value"]));

    for (key, value) in config_map.data.iter().flatten() {
        table.add(TableRow::new().with("Key", Text::new(key)).with("Value", Text::new(value)))?;
    }

    for key in config_map.binary_data.iter().flat_map(|d| d.keys()) {
        table.add(TableRow::new().with("Key", Text::new(key)).with("Value", Text::new(BINARY_DATA)))?;
    }

    Ok(table)
}
