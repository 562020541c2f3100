use k8s_openapi::api::core::v1::{LocalObjectReference, ObjectReference};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kdash_view::{Labels, SummarySection};
use std::collections::BTreeMap;

use crate::testing::{created, dynamic, labels, link, metadata, options};

use super::*;

fn service_account() -> ServiceAccount {
    let mut meta = metadata("builder", "default");
    meta.labels = Some(labels(&[("app", "ci")]));

    ServiceAccount {
        metadata: meta,
        image_pull_secrets: Some(vec![LocalObjectReference {
            name: "registry".to_owned(),
        }]),
        secrets: Some(vec![
            ObjectReference {
                name: Some("builder-mount".to_owned()),
                ..Default::default()
            },
            ObjectReference::default(),
        ]),
        ..Default::default()
    }
}

fn token(name: &str, account: &str, uid: Option<&str>) -> Secret {
    let mut annotations = BTreeMap::from([(SERVICE_ACCOUNT_NAME_KEY.to_owned(), account.to_owned())]);
    if let Some(uid) = uid {
        annotations.insert(SERVICE_ACCOUNT_UID_KEY.to_owned(), uid.to_owned());
    }

    let mut meta = metadata(name, "default");
    meta.annotations = Some(annotations);

    Secret {
        metadata: meta,
        type_: Some(SERVICE_ACCOUNT_TOKEN.to_owned()),
        ..Default::default()
    }
}

fn rule(resource: &str, verb: &str) -> PolicyRule {
    PolicyRule {
        api_groups: Some(vec![String::new()]),
        resources: Some(vec![resource.to_owned()]),
        verbs: vec![verb.to_owned()],
        ..Default::default()
    }
}

fn role(name: &str, rules: Vec<PolicyRule>) -> Role {
    Role {
        metadata: metadata(name, "default"),
        rules: Some(rules),
    }
}

fn cluster_role(name: &str, rules: Vec<PolicyRule>) -> ClusterRole {
    ClusterRole {
        metadata: ObjectMeta {
            name: Some(name.to_owned()),
            ..Default::default()
        },
        rules: Some(rules),
        ..Default::default()
    }
}

fn subject(kind: &str, name: &str, namespace: Option<&str>) -> Subject {
    Subject {
        kind: kind.to_owned(),
        name: name.to_owned(),
        namespace: namespace.map(String::from),
        ..Default::default()
    }
}

fn role_ref(kind: &str, name: &str) -> RoleRef {
    RoleRef {
        api_group: "rbac.authorization.k8s.io".to_owned(),
        kind: kind.to_owned(),
        name: name.to_owned(),
    }
}

fn role_binding(name: &str, role_ref: RoleRef, subjects: Vec<Subject>) -> RoleBinding {
    RoleBinding {
        metadata: metadata(name, "default"),
        role_ref,
        subjects: Some(subjects),
    }
}

fn cluster_role_binding(name: &str, role_ref: RoleRef, subjects: Vec<Subject>) -> ClusterRoleBinding {
    ClusterRoleBinding {
        metadata: ObjectMeta {
            name: Some(name.to_owned()),
            ..Default::default()
        },
        role_ref,
        subjects: Some(subjects),
    }
}

fn rbac_objects() -> Vec<kube::core::DynamicObject> {
    vec![
        dynamic(&role("pod-reader", vec![rule("pods", "get")])),
        dynamic(&cluster_role("node-reader", vec![rule("nodes", "list")])),
        dynamic(&role_binding(
            "a-read-pods",
            role_ref("Role", "pod-reader"),
            vec![subject("ServiceAccount", "builder", Some("default"))],
        )),
        dynamic(&role_binding(
            "b-other-account",
            role_ref("Role", "pod-reader"),
            vec![subject("ServiceAccount", "deployer", Some("default"))],
        )),
        dynamic(&role_binding(
            "c-missing-role",
            role_ref("Role", "secret-reader"),
            vec![subject("ServiceAccount", "builder", Some("default"))],
        )),
        dynamic(&cluster_role_binding(
            "read-nodes",
            role_ref("ClusterRole", "node-reader"),
            vec![subject("Group", "system:serviceaccounts:default", None)],
        )),
    ]
}

#[test]
fn service_account_list_handler_test() {
    let list = vec![service_account()];

    let table = service_account_list_handler(Some(list.as_slice()), &options(Vec::new())).unwrap();

    let expected = Table::with_rows(
        "Service Accounts",
        "We couldn't find any service accounts!",
        table_cols(&SERVICE_ACCOUNT_COLUMNS),
        vec![
            TableRow::new()
                .with("Name", link("default", "config-and-storage/service-accounts", "builder"))
                .with("Labels", Labels::new(labels(&[("app", "ci")])))
                .with("Secrets", Text::new("2"))
                .with("Age", timestamp(Some(&created()))),
        ],
    )
    .unwrap();
    assert_eq!(expected, table);
}

#[tokio::test]
async fn print_service_account_config_test() {
    let objects = vec![
        dynamic(&token("builder-token", "builder", Some("builder-uid"))),
        dynamic(&token("stale-token", "builder", Some("old-uid"))),
        dynamic(&token("deployer-token", "deployer", None)),
        dynamic(&token("plain-token", "builder", None)),
    ];

    let summary = print_service_account_config(&service_account(), &options(objects)).await.unwrap();

    let secret = |name| Component::from(link("default", "config-and-storage/secrets", name));
    let expected = Summary::new(
        "Configuration",
        vec![
            SummarySection::new("Image Pull Secrets", List::new("", vec![secret("registry")])),
            SummarySection::new("Mountable Secrets", List::new("", vec![secret("builder-mount")])),
            SummarySection::new(
                "Tokens",
                List::new("", vec![secret("builder-token"), secret("plain-token")]),
            ),
        ],
    );
    assert_eq!(expected, summary);
}

#[tokio::test]
async fn print_service_account_config_without_secrets_test() {
    let account = ServiceAccount {
        metadata: metadata("builder", "default"),
        ..Default::default()
    };

    let summary = print_service_account_config(&account, &options(Vec::new())).await.unwrap();

    assert!(summary.sections.is_empty());
}

#[tokio::test]
async fn policy_rules_collect_test() {
    let options = options(rbac_objects());
    let account = service_account();

    let rules = ServiceAccountPolicyRules::new(&account, options.store.as_ref())
        .collect()
        .await
        .unwrap();

    assert_eq!(vec![rule("pods", "get"), rule("nodes", "list")], rules);
}

#[tokio::test]
async fn policy_rules_for_other_namespace_test() {
    let options = options(rbac_objects());
    let mut account = service_account();
    account.metadata.namespace = Some("tools".to_owned());

    let rules = ServiceAccountPolicyRules::new(&account, options.store.as_ref())
        .collect()
        .await
        .unwrap();

    assert!(rules.is_empty());
}

#[test]
fn print_policy_rules_test() {
    let rules = vec![
        PolicyRule {
            api_groups: Some(vec![String::new(), "apps".to_owned()]),
            resources: Some(vec!["deployments".to_owned()]),
            resource_names: Some(vec!["web".to_owned()]),
            verbs: vec!["get".to_owned(), "watch".to_owned()],
            ..Default::default()
        },
        PolicyRule {
            non_resource_urls: Some(vec!["/healthz".to_owned()]),
            verbs: vec!["get".to_owned()],
            ..Default::default()
        },
    ];

    let table = print_policy_rules(&rules).unwrap();

    let expected = Table::with_rows(
        "Policy Rules",
        "There are no policy rules!",
        table_cols(&POLICY_RULE_COLUMNS),
        vec![
            TableRow::new()
                .with("Resources", Text::new("deployments, deployments.apps"))
                .with("Non-Resource URLs", Text::new("<none>"))
                .with("Resource Names", Text::new("web"))
                .with("Verbs", Text::new("get, watch")),
            TableRow::new()
                .with("Resources", Text::new("<none>"))
                .with("Non-Resource URLs", Text::new("/healthz"))
                .with("Resource Names", Text::new("<none>"))
                .with("Verbs", Text::new("get")),
        ],
    )
    .unwrap();
    assert_eq!(expected, table);
    assert_eq!("There are no policy rules!", print_policy_rules(&[]).unwrap().empty_content());
}

fn fake_config<'b>(_: &'b ServiceAccount, _: &'b PrintOptions) -> BoxedFuture<'b, Summary> {
    Box::pin(async {
        let sections = vec![SummarySection::new("Fake", Text::new("config"))];
        Ok::<_, PrintError>(Summary::new("Configuration", sections))
    })
}

fn fake_policy_rules<'b>(_: &'b ServiceAccount, _: &'b dyn ObjectStore) -> BoxedFuture<'b, Table> {
    Box::pin(async { print_policy_rules(&[rule("pods", "get")]) })
}

#[tokio::test]
async fn service_account_handler_test() {
    let options = options(Vec::new());
    let account = service_account();

    let component = ServiceAccountHandler::new(&account, &options)
        .with_config(fake_config)
        .with_policy_rules(fake_policy_rules)
        .run()
        .await
        .unwrap();

    let config = fake_config(&account, &options).await.unwrap();
    let metadata = metadata_summary(&ObjectRef::from_resource(&account), &account.metadata, &options).unwrap();
    let rules = print_policy_rules(&[rule("pods", "get")]).unwrap();

    let mut expected = FlexLayout::new("Summary");
    expected.add_section().add(config, Width::Half).unwrap();
    expected.add_section().add(metadata, Width::Half).unwrap();
    expected.add_section().add(rules, Width::Full).unwrap();
    assert_eq!(Component::from(expected), component);
}

#[tokio::test]
async fn service_account_handler_defaults_test() {
    let component = service_account_handler(Some(&service_account()), &options(rbac_objects()))
        .await
        .unwrap();

    let Component::FlexLayout(layout) = component else {
        panic!("expected flex layout");
    };
    let Component::Table(rules) = &layout.sections()[2].items()[0].view else {
        panic!("expected policy rules table");
    };
    assert_eq!(2, rules.rows().len());
}

#[tokio::test]
async fn service_account_handler_missing_account_test() {
    let result = service_account_handler(None, &options(Vec::new())).await;

    assert!(matches!(result, Err(PrintError::MissingInput("service account"))));
}

#[test]
fn service_account_list_handler_missing_list_test() {
    let result = service_account_list_handler(None, &options(Vec::new()));

    assert!(matches!(result, Err(PrintError::MissingInput("service account list"))));
}
