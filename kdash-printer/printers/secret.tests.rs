use k8s_openapi::ByteString;
use kdash_view::Labels;
use std::collections::BTreeMap;

use crate::testing::{created, labels, link, metadata, options};

use super::*;

fn secret() -> Secret {
    let mut meta = metadata("db-credentials", "default");
    meta.labels = Some(labels(&[("foo", "bar")]));

    Secret {
        metadata: meta,
        type_: Some("Opaque".to_owned()),
        data: Some(BTreeMap::from([
            ("username".to_owned(), ByteString(b"admin".to_vec())),
            ("password".to_owned(), ByteString(b"secret".to_vec())),
        ])),
        ..Default::default()
    }
}

#[test]
fn secret_list_handler_test() {
    let list = vec![secret()];

    let table = secret_list_handler(Some(list.as_slice()), &options(Vec::new())).unwrap();

    let expected = Table::with_rows(
        "Secrets",
        "We couldn't find any secrets!",
        table_cols(&SECRET_COLUMNS),
        vec![
            TableRow::new()
                .with("Name", link("default", "config-and-storage/secrets", "db-credentials"))
                .with("Labels", Labels::new(labels(&[("foo", "bar")])))
                .with("Type", Text::new("Opaque"))
                .with("Data", Text::new("2"))
                .with("Age", timestamp(Some(&created()))),
        ],
    )
    .unwrap();
    assert_eq!(expected, table);
    assert!(secret_list_handler(None, &options(Vec::new())).is_err());
}

#[test]
fn secret_data_test() {
    let table = secret_data(&secret()).unwrap();

    let keys = table.rows().iter().filter_map(|r| r.get("Key").cloned()).collect::<Vec<_>>();
    assert_eq!(
        vec![Component::Text(Text::new("password")), Component::Text(Text::new("username"))],
        keys
    );
    assert_eq!("This secret has no data!", secret_data(&Secret::default()).unwrap().empty_content());
}

#[tokio::test]
async fn secret_handler_test() {
    let component = secret_handler(Some(&secret()), &options(Vec::new())).await.unwrap();

    let Component::FlexLayout(layout) = component else {
        panic!("expected flex layout");
    };
    let titles = layout
        .sections()
        .iter()
        .flat_map(|s| s.items())
        .map(|i| i.view.title().unwrap_or_default().to_owned())
        .collect::<Vec<_>>();
    assert_eq!(vec!["Configuration", "Metadata", "Data"], titles);

    let Component::Summary(config) = &layout.sections()[0].items()[0].view else {
        panic!("expected configuration summary");
    };
    assert_eq!(secret_configuration(&secret()), *config);
}

#[tokio::test]
async fn secret_handler_missing_secret_test() {
    let result = secret_handler(None, &options(Vec::new())).await;

    assert!(matches!(result, Err(PrintError::MissingInput("secret"))));
}
