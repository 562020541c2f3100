use k8s_openapi::api::core::v1::Pod;
use rstest::rstest;

use crate::testing::{dynamic, metadata, options};

use super::*;

fn config_map() -> ConfigMap {
    ConfigMap {
        metadata: metadata("env-config", "default"),
        data: Some([("mode".to_owned(), "prod".to_owned())].into()),
        ..Default::default()
    }
}

#[tokio::test]
async fn print_dispatches_by_kind_test() {
    let options = options(Vec::new());
    let printer = Printer::new(options.clone());

    let component = printer.print(Some(&dynamic(&config_map()))).await.unwrap();

    let expected = config_map_handler(Some(&config_map()), &options).await.unwrap();
    assert_eq!(expected, component);
}

#[tokio::test]
async fn print_service_account_test() {
    let account = ServiceAccount {
        metadata: metadata("builder", "default"),
        ..Default::default()
    };
    let printer = Printer::new(options(Vec::new()));

    let component = printer.print(Some(&dynamic(&account))).await.unwrap();

    assert!(matches!(component, Component::FlexLayout(_)));
}

#[tokio::test]
async fn print_unsupported_kind_test() {
    let pod = Pod {
        metadata: metadata("web", "default"),
        ..Default::default()
    };
    let printer = Printer::new(options(Vec::new()));

    let result = printer.print(Some(&dynamic(&pod))).await;

    assert!(matches!(
        result,
        Err(PrintError::UnsupportedKind { api_version, kind }) if api_version == "v1" && kind == "Pod"
    ));
}

#[tokio::test]
async fn print_missing_object_test() {
    let printer = Printer::new(options(Vec::new()));

    assert!(matches!(printer.print(None).await, Err(PrintError::MissingInput("object"))));
}

#[rstest]
#[case("apps/v1", "Deployment", "Deployments")]
#[case("batch/v1", "Job", "Jobs")]
#[case("v1", "ConfigMap", "ConfigMaps")]
#[case("v1", "ReplicationController", "ReplicationControllers")]
#[case("v1", "Secret", "Secrets")]
#[case("v1", "ServiceAccount", "Service Accounts")]
fn print_empty_list_test(#[case] api_version: &str, #[case] kind: &str, #[case] title: &str) {
    let printer = Printer::new(options(Vec::new()));

    let component = printer.print_list(api_version, kind, &[]).unwrap();

    let Component::Table(table) = component else {
        panic!("expected table");
    };
    assert_eq!(title, table.title);
    assert!(table.is_empty());
}

#[test]
fn print_list_test() {
    let mut second = config_map();
    second.metadata.name = Some("app-config".to_owned());
    let objects = vec![dynamic(&config_map()), dynamic(&second)];
    let options = options(Vec::new());
    let printer = Printer::new(options.clone());

    let component = printer.print_list("v1", "ConfigMap", &objects).unwrap();

    let list = vec![config_map(), second];
    let expected = config_map_list_handler(Some(list.as_slice()), &options).unwrap();
    assert_eq!(Component::Table(expected), component);
}

#[test]
fn print_list_unsupported_kind_test() {
    let printer = Printer::new(options(Vec::new()));

    let result = printer.print_list("v1", "Pod", &[]);

    assert!(matches!(result, Err(PrintError::UnsupportedKind { .. })));
}
