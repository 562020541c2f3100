use k8s_openapi::api::apps::v1::{DeploymentCondition, DeploymentStatus, DeploymentStrategy, RollingUpdateDeployment};
use k8s_openapi::api::core::v1::{Container, Pod, PodSpec, PodTemplateSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, LabelSelectorRequirement, ObjectMeta};
use kdash_view::{Containers, Labels, Operator, Selector, Selectors};

use crate::testing::{created, dynamic, labels, link, metadata, options};

use super::*;

fn template(pod_labels: &[(&str, &str)]) -> PodTemplateSpec {
    PodTemplateSpec {
        metadata: Some(ObjectMeta {
            labels: Some(labels(pod_labels)),
            ..Default::default()
        }),
        spec: Some(PodSpec {
            containers: vec![
                Container {
                    name: "nginx".to_owned(),
                    image: Some("nginx:1.15".to_owned()),
                    ..Default::default()
                },
                Container {
                    name: "kuard".to_owned(),
                    image: Some("gcr.io/kuar-demo/kuard-amd64:1".to_owned()),
                    ..Default::default()
                },
            ],
            ..Default::default()
        }),
    }
}

fn deployment() -> Deployment {
    let mut meta = metadata("deployment", "default");
    meta.labels = Some(labels(&[("foo", "bar")]));

    Deployment {
        metadata: meta,
        spec: Some(DeploymentSpec {
            replicas: Some(3),
            selector: LabelSelector {
                match_labels: Some(labels(&[("app", "my_app")])),
                match_expressions: None,
            },
            template: template(&[("app", "my_app")]),
            ..Default::default()
        }),
        status: Some(DeploymentStatus {
            replicas: Some(3),
            available_replicas: Some(2),
            unavailable_replicas: Some(1),
            ..Default::default()
        }),
    }
}

#[test]
fn deployment_list_handler_test() {
    let list = vec![deployment()];

    let table = deployment_list_handler(Some(list.as_slice()), &options(Vec::new())).unwrap();

    let mut containers = Containers::new();
    containers.add("nginx", "nginx:1.15");
    containers.add("kuard", "gcr.io/kuar-demo/kuard-amd64:1");
    let expected = Table::with_rows(
        "Deployments",
        "We couldn't find any deployments!",
        table_cols(&DEPLOYMENT_COLUMNS),
        vec![
            TableRow::new()
                .with("Name", link("default", "workloads/deployments", "deployment"))
                .with("Labels", Labels::new(labels(&[("foo", "bar")])))
                .with("Age", timestamp(Some(&created())))
                .with("Selector", Selectors::new(vec![Selector::label("app", "my_app")]))
                .with("Status", Text::new("2/3"))
                .with("Containers", containers),
        ],
    )
    .unwrap();
    assert_eq!(expected, table);
}

#[test]
fn deployment_list_handler_keeps_order_test() {
    let mut second = deployment();
    second.metadata.name = Some("a-second".to_owned());
    let list = vec![deployment(), second];

    let table = deployment_list_handler(Some(list.as_slice()), &options(Vec::new())).unwrap();

    let names = table
        .rows()
        .iter()
        .map(|r| match r.get("Name") {
            Some(Component::Link(link)) => link.value.clone(),
            _ => String::new(),
        })
        .collect::<Vec<_>>();
    assert_eq!(vec!["deployment", "a-second"], names);
    assert!(deployment_list_handler(None, &options(Vec::new())).is_err());
}

#[test]
fn deployment_configuration_test() {
    let mut deployment = deployment();
    let spec = deployment.spec.as_mut().unwrap();
    spec.revision_history_limit = Some(5);
    spec.selector.match_expressions = Some(vec![LabelSelectorRequirement {
        key: "key".to_owned(),
        operator: "In".to_owned(),
        values: Some(vec!["value1".to_owned(), "value2".to_owned()]),
    }]);
    spec.strategy = Some(DeploymentStrategy {
        type_: Some("RollingUpdate".to_owned()),
        rolling_update: Some(RollingUpdateDeployment {
            max_surge: Some(IntOrString::String("25%".to_owned())),
            max_unavailable: Some(IntOrString::Int(1)),
        }),
    });

    let summary = DeploymentConfiguration::new(Some(&deployment))
        .with_actions(Vec::new())
        .create()
        .unwrap();

    let mut sections = SummarySections::new();
    sections.add_text("Deployment Strategy", "RollingUpdate");
    sections.add_text("Rolling Update Strategy", "Max Surge 25%, Max Unavailable 1");
    sections.add(
        "Selectors",
        Selectors::new(vec![
            Selector::expression("key", Operator::In, vec!["value1".to_owned(), "value2".to_owned()]),
            Selector::label("app", "my_app"),
        ]),
    );
    sections.add_text("Min Ready Seconds", "0");
    sections.add_text("Revision History Limit", "5");
    sections.add_text("Replicas", "3");
    assert_eq!(Summary::new("Configuration", sections), summary);
}

#[test]
fn deployment_configuration_recreate_test() {
    let mut deployment = deployment();
    deployment.spec.as_mut().unwrap().strategy = Some(DeploymentStrategy {
        type_: Some("Recreate".to_owned()),
        rolling_update: None,
    });

    let summary = DeploymentConfiguration::new(Some(&deployment)).create().unwrap();

    let headers = summary.sections.iter().map(|s| s.header.as_str()).collect::<Vec<_>>();
    assert_eq!(vec!["Deployment Strategy", "Selectors", "Min Ready Seconds", "Replicas"], headers);
    assert_eq!(1, summary.actions.len());
}

#[test]
fn deployment_configuration_missing_deployment_test() {
    let result = DeploymentConfiguration::new(None).create();

    assert!(matches!(result, Err(PrintError::MissingInput(_))));
}

#[test]
fn edit_deployment_action_test() {
    let actions = edit_deployment_action(&deployment());

    let expected = Action {
        name: "Edit".to_owned(),
        title: "Deployment Editor".to_owned(),
        form: Form {
            fields: vec![
                FormField::number("Replicas", "replicas", "3"),
                FormField::hidden("group", "apps"),
                FormField::hidden("version", "v1"),
                FormField::hidden("kind", "Deployment"),
                FormField::hidden("name", "deployment"),
                FormField::hidden("namespace", "default"),
                FormField::hidden("action", "deployment/configuration"),
            ],
        },
    };
    assert_eq!(vec![expected], actions);
}

#[test]
fn deployment_status_test() {
    let deployment = Deployment {
        status: Some(DeploymentStatus {
            updated_replicas: Some(1),
            replicas: Some(2),
            unavailable_replicas: Some(3),
            available_replicas: Some(4),
            ready_replicas: Some(5),
            ..Default::default()
        }),
        ..Default::default()
    };

    let mut sections = SummarySections::new();
    sections.add_text("Available Replicas", "4");
    sections.add_text("Ready Replicas", "5");
    sections.add_text("Total Replicas", "2");
    sections.add_text("Unavailable Replicas", "3");
    sections.add_text("Updated Replicas", "1");
    assert_eq!(Summary::new("Status", sections), deployment_status(&deployment));
}

#[test]
fn deployment_conditions_test() {
    let condition = |n: u8| DeploymentCondition {
        type_: format!("type{n}"),
        status: format!("status{n}"),
        reason: Some(format!("reason{n}")),
        message: Some(format!("message{n}")),
        last_update_time: Some(created()),
        last_transition_time: Some(created()),
    };
    let deployment = Deployment {
        status: Some(DeploymentStatus {
            conditions: Some(vec![condition(1), condition(2)]),
            ..Default::default()
        }),
        ..Default::default()
    };

    let table = deployment_conditions(&deployment).unwrap();

    let row = |n: u8| {
        TableRow::new()
            .with("Type", Text::new(format!("type{n}")))
            .with("Reason", Text::new(format!("reason{n}")))
            .with("Status", Text::new(format!("status{n}")))
            .with("Message", Text::new(format!("message{n}")))
            .with("Last Update", timestamp(Some(&created())))
            .with("Last Transition", timestamp(Some(&created())))
    };
    let expected = Table::with_rows(
        "Conditions",
        "There are no deployment conditions!",
        table_cols(&DEPLOYMENT_CONDITION_COLUMNS),
        vec![row(1), row(2)],
    )
    .unwrap();
    assert_eq!(expected, table);
}

#[tokio::test]
async fn deployment_pods_test() {
    let mut pod = Pod {
        metadata: metadata("pod", "default"),
        ..Default::default()
    };
    pod.metadata.labels = Some(labels(&[("app", "my_app")]));
    let options = options(vec![dynamic(&pod)]);

    let table = deployment_pods(&deployment(), &options).await.unwrap();

    let expected = TableRow::new()
        .with("Name", link("default", "workloads/pods", "pod"))
        .with("Ready", Text::new("0/0"))
        .with("Phase", Text::new(""))
        .with("Restarts", Text::new("0"))
        .with("Node", Text::new("<not scheduled>"))
        .with("Age", timestamp(Some(&created())));
    assert_eq!(&[expected], table.rows());
    assert!(!table.has_column("Labels"));
}

#[tokio::test]
async fn deployment_handler_test() {
    let component = deployment_handler(Some(&deployment()), &options(Vec::new())).await.unwrap();

    let Component::FlexLayout(layout) = component else {
        panic!("expected flex layout");
    };
    let titles = layout
        .sections()
        .iter()
        .flat_map(|s| s.items())
        .map(|i| i.view.title().unwrap_or_default().to_owned())
        .collect::<Vec<_>>();
    assert_eq!(
        vec![
            "Configuration",
            "Status",
            "Metadata",
            "Pods",
            "Conditions",
            "Pod Template",
            "Container nginx",
            "Container kuard",
            "Events",
        ],
        titles
    );
    assert!(deployment_handler(None, &options(Vec::new())).await.is_err());
}
