use crate::Text;

use super::*;

#[test]
fn add_row_test() {
    let mut table = Table::new("Secrets", "none", table_cols(&["Name", "Type"]));
    table
        .add(TableRow::new().with("Name", Text::new("a")).with("Type", Text::new("Opaque")))
        .unwrap();
    table.add(TableRow::new().with("Name", Text::new("b"))).unwrap();

    assert_eq!(2, table.rows().len());
    assert_eq!(Some(&Text::new("a").into()), table.rows()[0].get("Name"));
    assert_eq!(Some(&Text::new("b").into()), table.rows()[1].get("Name"));
    assert_eq!(None, table.rows()[1].get("Type"));
}

#[test]
fn add_row_with_unknown_column_test() {
    let mut table = Table::new("Plugins", "", table_cols(&["Name", "Capabilities"]));
    let result = table.add(TableRow::new().with("Capability", Text::new("{}")));

    assert_eq!(
        Err(ViewError::UnknownColumn {
            table: "Plugins".to_owned(),
            column: "Capability".to_owned(),
        }),
        result
    );
    assert!(table.is_empty());
}

#[test]
fn with_rows_keeps_order_test() {
    let rows = (0..5)
        .map(|i| TableRow::new().with("Key", Text::new(i.to_string())))
        .collect::<Vec<_>>();
    let table = Table::with_rows("Data", "empty", table_cols(&["Key"]), rows.clone()).unwrap();

    assert_eq!(rows.as_slice(), table.rows());
    assert_eq!("empty", table.empty_content());
}
