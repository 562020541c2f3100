use k8s_openapi::api::core::v1::{
    Container, Pod, PodSpec, PodStatus as PodPhase, PodTemplateSpec, ReplicationControllerSpec,
    ReplicationControllerStatus as RcStatus,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::OwnerReference;
use kdash_view::{Containers, Labels, Selector, Selectors, TableRow, table_cols};

use crate::testing::{created, dynamic, failing_options, labels, link, metadata, options};

use super::*;

fn rc(name: &str, namespace: &str) -> ReplicationController {
    let mut meta = metadata(name, namespace);
    meta.labels = Some(labels(&[("foo", "bar")]));

    ReplicationController {
        metadata: meta,
        spec: Some(ReplicationControllerSpec {
            replicas: Some(3),
            selector: Some(labels(&[("foo", "bar")])),
            template: Some(PodTemplateSpec {
                metadata: None,
                spec: Some(PodSpec {
                    containers: vec![Container {
                        name: "nginx".to_owned(),
                        image: Some("nginx:1.15".to_owned()),
                        ..Default::default()
                    }],
                    ..Default::default()
                }),
            }),
            ..Default::default()
        }),
        status: Some(RcStatus {
            replicas: 3,
            available_replicas: Some(0),
            ready_replicas: Some(2),
            ..Default::default()
        }),
    }
}

fn pod(name: &str, phase: &str, owner_uid: &str) -> Pod {
    let mut meta = metadata(name, "testing");
    meta.labels = Some(labels(&[("foo", "bar")]));
    meta.owner_references = Some(vec![OwnerReference {
        api_version: "v1".to_owned(),
        kind: "ReplicationController".to_owned(),
        name: "rc".to_owned(),
        uid: owner_uid.to_owned(),
        controller: Some(true),
        ..Default::default()
    }]);

    Pod {
        metadata: meta,
        spec: None,
        status: Some(PodPhase {
            phase: Some(phase.to_owned()),
            ..Default::default()
        }),
    }
}

#[test]
fn replication_controller_list_handler_test() {
    let list = vec![rc("rc-test", "default")];

    let table = replication_controller_list_handler(Some(list.as_slice()), &options(Vec::new())).unwrap();

    let mut containers = Containers::new();
    containers.add("nginx", "nginx:1.15");
    let expected = Table::with_rows(
        "ReplicationControllers",
        "We couldn't find any replication controllers!",
        table_cols(&REPLICATION_CONTROLLER_COLUMNS),
        vec![
            TableRow::new()
                .with("Name", link("default", "workloads/replication-controllers", "rc-test"))
                .with("Labels", Labels::new(labels(&[("foo", "bar")])))
                .with("Status", Text::new("0/3"))
                .with("Age", timestamp(Some(&created())))
                .with("Containers", containers)
                .with("Selector", Selectors::new(vec![Selector::label("foo", "bar")])),
        ],
    )
    .unwrap();
    assert_eq!(expected, table);
}

#[test]
fn replication_controller_configuration_test() {
    let mut controlled = rc("rc", "default");
    controlled.metadata.owner_references = Some(vec![OwnerReference {
        api_version: "apps/v1".to_owned(),
        kind: "Deployment".to_owned(),
        name: "web".to_owned(),
        uid: "web-uid".to_owned(),
        controller: Some(true),
        ..Default::default()
    }]);

    let summary = ReplicationControllerConfiguration::new(Some(&controlled))
        .create(&options(Vec::new()))
        .unwrap();

    let mut sections = SummarySections::new();
    sections.add("Controlled By", link("default", "workloads/deployments", "web"));
    sections.add_text("Replica Status", "Current 2 / Desired 3");
    sections.add_text("Replicas", "3");
    assert_eq!(Summary::new("Configuration", sections), summary);
}

#[test]
fn replication_controller_configuration_missing_test() {
    let result = ReplicationControllerConfiguration::new(None).create(&options(Vec::new()));

    assert!(matches!(result, Err(PrintError::MissingInput(_))));
}

#[tokio::test]
async fn replication_controller_status_test() {
    let rc = rc("rc", "testing");
    let options = options(vec![
        dynamic(&pod("nginx-g7f72", "Running", "rc-uid")),
        dynamic(&pod("nginx-p64jr", "Running", "rc-uid")),
        dynamic(&pod("nginx-x8nrk", "Running", "rc-uid")),
        dynamic(&pod("nginx-zz001", "Failed", "other-uid")),
    ]);

    let quadrant = ReplicationControllerStatus::new(Some(&rc))
        .create(options.store.as_ref())
        .await
        .unwrap();

    let mut expected = Quadrant::new("Status");
    expected.set(QuadrantPosition::NW, "Running", "3");
    expected.set(QuadrantPosition::NE, "Waiting", "0");
    expected.set(QuadrantPosition::SW, "Succeeded", "0");
    expected.set(QuadrantPosition::SE, "Failed", "0");
    assert_eq!(expected, quadrant);
}

#[tokio::test]
async fn replication_controller_status_store_error_test() {
    let rc = rc("rc", "testing");
    let options = failing_options();

    let result = ReplicationControllerStatus::new(Some(&rc))
        .create(options.store.as_ref())
        .await;

    assert!(matches!(result, Err(PrintError::Store(_))));
}

#[tokio::test]
async fn replication_controller_handler_test() {
    let component = replication_controller_handler(Some(&rc("rc", "default")), &options(Vec::new()))
        .await
        .unwrap();

    let Component::FlexLayout(layout) = component else {
        panic!("expected flex layout");
    };
    let sections = layout
        .sections()
        .iter()
        .map(|s| {
            s.items()
                .iter()
                .map(|i| (i.view.title().unwrap_or_default().to_owned(), i.width.value()))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    let item = |title: &str, width: Width| (title.to_owned(), width.value());
    assert_eq!(
        vec![
            vec![item("Configuration", Width::Half)],
            vec![item("Metadata", Width::Half)],
            vec![item("Status", Width::Quarter)],
            vec![item("Pods", Width::Full)],
            vec![item("Pod Template", Width::Full)],
            vec![item("Container nginx", Width::Half)],
            vec![item("Events", Width::Full)],
        ],
        sections
    );
}

#[test]
fn replication_controller_list_handler_missing_list_test() {
    let result = replication_controller_list_handler(None, &options(Vec::new()));

    assert!(matches!(result, Err(PrintError::MissingInput("replication controller list"))));
}

#[tokio::test]
async fn replication_controller_handler_missing_rc_test() {
    let result = replication_controller_handler(None, &options(Vec::new())).await;

    assert!(matches!(result, Err(PrintError::MissingInput("replication controller"))));
}

#[tokio::test]
async fn replication_controller_status_missing_rc_test() {
    let options = options(Vec::new());

    let result = ReplicationControllerStatus::new(None).create(options.store.as_ref()).await;

    assert!(matches!(result, Err(PrintError::MissingInput("replication controller"))));
}
