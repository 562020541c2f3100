use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::ConfigMap;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kdash_kube::utils::to_dynamic;
use std::path::PathBuf;

use super::*;

fn meta(name: &str, namespace: &str) -> ObjectMeta {
    ObjectMeta {
        name: Some(name.to_owned()),
        namespace: Some(namespace.to_owned()),
        ..Default::default()
    }
}

fn objects() -> Vec<DynamicObject> {
    vec![
        to_dynamic(&ConfigMap {
            metadata: meta("settings", "default"),
            ..Default::default()
        })
        .unwrap(),
        to_dynamic(&Deployment {
            metadata: meta("web", "default"),
            ..Default::default()
        })
        .unwrap(),
        to_dynamic(&Deployment {
            metadata: meta("api", "prod"),
            ..Default::default()
        })
        .unwrap(),
    ]
}

fn args(kind: Option<&str>, name: Option<&str>, namespace: Option<&str>) -> PrintArgs {
    PrintArgs {
        files: vec![PathBuf::from("manifest.yaml")],
        kind: kind.map(String::from),
        name: name.map(String::from),
        namespace: namespace.map(String::from),
        list: false,
        pretty: false,
    }
}

#[test]
fn select_object_test() {
    let objects = objects();

    let first = select_object(&objects, &args(None, None, None)).unwrap();
    assert_eq!("settings", first.name_any());

    let deployment = select_object(&objects, &args(Some("apps/v1/Deployment"), None, Some("prod"))).unwrap();
    assert_eq!("api", deployment.name_any());

    let named = select_object(&objects, &args(Some("Deployment"), Some("web"), None)).unwrap();
    assert_eq!("web", named.name_any());

    assert!(select_object(&objects, &args(Some("Job"), None, None)).is_none());
}

#[test]
fn select_list_test() {
    let objects = objects();

    let (api_version, kind, list) = select_list(&objects, &args(Some("Deployment"), Some("web"), None)).unwrap();

    assert_eq!("apps/v1", api_version);
    assert_eq!("Deployment", kind);
    assert_eq!(vec!["web", "api"], list.iter().map(|o| o.name_any()).collect::<Vec<_>>());
}

#[test]
fn select_list_in_namespace_test() {
    let objects = objects();

    let (_, _, list) = select_list(&objects, &args(Some("Deployment"), None, Some("prod"))).unwrap();

    assert_eq!(1, list.len());
    assert!(select_list(&objects, &args(Some("Secret"), None, None)).is_none());
}
