use k8s_openapi::api::core::v1::{Container, ContainerStatus, PodSpec, PodStatus as PodPhase};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::OwnerReference;
use kdash_view::{Labels, TableRow};

use crate::testing::{created, dynamic, failing_options, labels, link, metadata, options};
use crate::utils::timestamp;

use super::*;

fn pod(name: &str, pod_labels: &[(&str, &str)], phase: &str, owner_uid: Option<&str>) -> Pod {
    let mut meta = metadata(name, "default");
    meta.labels = Some(labels(pod_labels));
    meta.owner_references = owner_uid.map(|uid| {
        vec![OwnerReference {
            api_version: "v1".to_owned(),
            kind: "ReplicationController".to_owned(),
            name: "rc".to_owned(),
            uid: uid.to_owned(),
            controller: Some(true),
            ..Default::default()
        }]
    });

    Pod {
        metadata: meta,
        spec: None,
        status: Some(PodPhase {
            phase: Some(phase.to_owned()),
            ..Default::default()
        }),
    }
}

fn owner() -> ObjectRef {
    ObjectRef {
        api_version: "apps/v1".to_owned(),
        kind: "Deployment".to_owned(),
        namespace: Some("default".to_owned()),
        name: "web".to_owned(),
        uid: None,
    }
}

#[tokio::test]
async fn create_pod_list_view_test() {
    let mut running = pod("web-1", &[("app", "web")], "Running", None);
    running.spec = Some(PodSpec {
        node_name: Some("node-a".to_owned()),
        containers: vec![
            Container {
                name: "nginx".to_owned(),
                ..Default::default()
            },
            Container {
                name: "sidecar".to_owned(),
                ..Default::default()
            },
        ],
        ..Default::default()
    });
    running.status.as_mut().unwrap().container_statuses = Some(vec![
        ContainerStatus {
            name: "nginx".to_owned(),
            ready: true,
            restart_count: 2,
            ..Default::default()
        },
        ContainerStatus {
            name: "sidecar".to_owned(),
            ready: false,
            restart_count: 1,
            ..Default::default()
        },
    ]);
    let other = pod("db-1", &[("app", "db")], "Running", None);
    let options = options(vec![dynamic(&running), dynamic(&other)]);

    let table = create_pod_list_view(&owner(), Some(&labels(&[("app", "web")])), &options)
        .await
        .unwrap();

    let expected = TableRow::new()
        .with("Name", link("default", "workloads/pods", "web-1"))
        .with("Labels", Labels::new(labels(&[("app", "web")])))
        .with("Ready", Text::new("1/2"))
        .with("Phase", Text::new("Running"))
        .with("Restarts", Text::new("3"))
        .with("Node", Text::new("node-a"))
        .with("Age", timestamp(Some(&created())));
    assert_eq!("Pods", table.title);
    assert_eq!("We couldn't find any pods!", table.empty_content());
    assert_eq!(&[expected], table.rows());
}

#[tokio::test]
async fn create_pod_list_view_without_labels_test() {
    let mut unscheduled = pod("web-1", &[("app", "web")], "Pending", None);
    unscheduled.status = None;
    let options = options(vec![dynamic(&unscheduled)]).without_labels();

    let table = create_pod_list_view(&owner(), Some(&labels(&[("app", "web")])), &options)
        .await
        .unwrap();

    let columns = table.columns().iter().map(|c| c.name.as_str()).collect::<Vec<_>>();
    assert_eq!(vec!["Name", "Ready", "Phase", "Restarts", "Node", "Age"], columns);

    let expected = TableRow::new()
        .with("Name", link("default", "workloads/pods", "web-1"))
        .with("Ready", Text::new("0/0"))
        .with("Phase", Text::new(""))
        .with("Restarts", Text::new("0"))
        .with("Node", Text::new("<not scheduled>"))
        .with("Age", timestamp(Some(&created())));
    assert_eq!(&[expected], table.rows());
}

#[tokio::test]
async fn create_pod_list_view_store_error_test() {
    let result = create_pod_list_view(&owner(), None, &failing_options()).await;

    assert!(matches!(result, Err(PrintError::Store(_))));
}

#[tokio::test]
async fn list_pods_test() {
    let options = options(vec![
        dynamic(&pod("a", &[("foo", "bar")], "Running", Some("rc-uid"))),
        dynamic(&pod("b", &[("foo", "bar")], "Pending", Some("rc-uid"))),
        dynamic(&pod("c", &[("foo", "bar")], "Running", Some("other-uid"))),
        dynamic(&pod("d", &[("foo", "baz")], "Running", Some("rc-uid"))),
    ]);
    let selector = LabelSelector {
        match_labels: Some(labels(&[("foo", "bar")])),
        match_expressions: None,
    };

    let pods = list_pods(Some("default"), &selector, Some("rc-uid"), options.store.as_ref())
        .await
        .unwrap();
    let names = pods.iter().map(|p| p.name_any()).collect::<Vec<_>>();
    assert_eq!(vec!["a", "b"], names);

    let pods = list_pods(Some("default"), &selector, None, options.store.as_ref())
        .await
        .unwrap();
    assert_eq!(3, pods.len());
}

#[test]
fn pod_status_test() {
    let pods = vec![
        pod("a", &[], "Running", None),
        pod("b", &[], "Running", None),
        pod("c", &[], "Pending", None),
        pod("d", &[], "Succeeded", None),
        pod("e", &[], "Failed", None),
        pod("f", &[], "Unknown", None),
    ];

    let expected = PodStatus {
        running: 2,
        waiting: 1,
        succeeded: 1,
        failed: 1,
    };
    assert_eq!(expected, PodStatus::new(&pods));
}
