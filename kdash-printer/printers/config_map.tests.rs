use k8s_openapi::ByteString;
use kdash_view::Labels;
use std::collections::BTreeMap;

use crate::testing::{created, labels, link, metadata, options};

use super::*;

fn config_map() -> ConfigMap {
    let mut meta = metadata("env-config", "default");
    meta.labels = Some(labels(&[("foo", "bar")]));

    ConfigMap {
        metadata: meta,
        data: Some(labels(&[("log_level", "INFO"), ("mode", "prod")])),
        ..Default::default()
    }
}

#[test]
fn config_map_list_handler_test() {
    let list = vec![config_map()];

    let table = config_map_list_handler(Some(list.as_slice()), &options(Vec::new())).unwrap();

    let expected = Table::with_rows(
        "ConfigMaps",
        "We couldn't find any config maps!",
        table_cols(&CONFIG_MAP_COLUMNS),
        vec![
            TableRow::new()
                .with("Name", link("default", "config-and-storage/config-maps", "env-config"))
                .with("Labels", Labels::new(labels(&[("foo", "bar")])))
                .with("Data", Text::new("2"))
                .with("Age", timestamp(Some(&created()))),
        ],
    )
    .unwrap();
    assert_eq!(expected, table);
}

#[test]
fn config_map_list_handler_missing_list_test() {
    let result = config_map_list_handler(None, &options(Vec::new()));

    assert!(matches!(result, Err(PrintError::MissingInput(_))));
}

#[test]
fn describe_config_map_config_test() {
    let summary = describe_config_map_config(Some(&config_map())).unwrap();

    let mut sections = SummarySections::new();
    sections.add("Age", timestamp(Some(&created())));
    assert_eq!(Summary::new("Configuration", sections), summary);

    assert!(matches!(describe_config_map_config(None), Err(PrintError::MissingInput(_))));
}

#[test]
fn describe_config_map_data_test() {
    let mut config_map = config_map();
    config_map.binary_data = Some(BTreeMap::from([("cert".to_owned(), ByteString(vec![1, 2, 3]))]));

    let table = describe_config_map_data(&config_map).unwrap();

    let keys = table
        .rows()
        .iter()
        .map(|r| (r.get("Key").cloned(), r.get("Value").cloned()))
        .collect::<Vec<_>>();
    let text = |v: &str| Some(Component::Text(Text::new(v)));
    assert_eq!(
        vec![
            (text("log_level"), text("INFO")),
            (text("mode"), text("prod")),
            (text("cert"), text("<binary data>")),
        ],
        keys
    );
}

#[test]
fn describe_config_map_data_empty_test() {
    let config_map = ConfigMap::default();

    let table = describe_config_map_data(&config_map).unwrap();

    assert!(table.is_empty());
    assert_eq!("This config map has no data!", table.empty_content());
}

#[tokio::test]
async fn config_map_handler_test() {
    let component = config_map_handler(Some(&config_map()), &options(Vec::new())).await.unwrap();

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

    assert!(matches!(
        config_map_handler(None, &options(Vec::new())).await,
        Err(PrintError::MissingInput(_))
    ));
}
