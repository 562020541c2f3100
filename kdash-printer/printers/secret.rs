use k8s_openapi::api::core::v1::Secret;
use kdash_view::{Component, Summary, SummarySections, Table, TableRow, Text, Width, table_cols};
use kube::ResourceExt;

use crate::utils::{list_columns, list_row, timestamp};
use crate::{ItemDescriptor, Object, PrintError, PrintOptions};

#[cfg(test)]
#[path = "./secret.tests.rs"]
mod secret_tests;

pub const SECRET_COLUMNS: [&str; 5] = ["Name", "Labels", "Type", "Data", "Age"];

/// Creates "Secrets" table.
pub fn secret_list_handler(list: Option<&[Secret]>, options: &PrintOptions) -> Result<Table, PrintError> {
    let list = list.ok_or(PrintError::MissingInput("secret list"))?;
    let mut table = Table::new("Secrets", "We couldn't find any secrets!", list_columns(&SECRET_COLUMNS, options));

    for secret in list {
        let row = list_row(secret, options)?
            .with("Type", Text::new(secret.type_.as_deref().unwrap_or_default()))
            .with("Data", Text::new(secret.data.as_ref().map_or(0, |d| d.len()).to_string()))
            .with("Age", timestamp(secret.creation_timestamp().as_ref()));
        table.add(row)?;
    }

    Ok(table)
}

/// Prints the secret summary, values of the secret are never shown.
pub async fn secret_handler(secret: Option<&Secret>, options: &PrintOptions) -> Result<Component, PrintError> {
    let secret = secret.ok_or(PrintError::MissingInput("secret"))?;
    let mut object = Object::new(secret)?;

    object.register_config(secret_configuration(secret));
    object.register_items(ItemDescriptor::new(Width::Full, async move { secret_data(secret) }));

    object.to_component(options).await
}

fn secret_configuration(secret: &Secret) -> Summary {
    let mut sections = SummarySections::new();
    sections.add_text("Type", secret.type_.as_deref().unwrap_or_default());

    Summary::new("Configuration", sections)
}

fn secret_data(secret: &Secret) -> Result<Table, PrintError> {
    let mut table = Table::new("Data", "This secret has no data!", table_cols(&["Key"]));
    for key in secret.data.iter().flat_map(|d| d.keys()) {
        table.add(TableRow::new().with("Key", Text::new(key)))?;
    }

    Ok(table)
}
