use rstest::rstest;

use super::*;

#[rstest]
#[case("/overview/namespace/default/workloads/deployments/nginx", Some("default"), "apps/v1", "Deployment", "nginx")]
#[case("/overview/namespace/apps/config-and-storage/secrets/token", Some("apps"), "v1", "Secret", "token")]
#[case("/overview/namespace/default/rbac/role-bindings/rb1", Some("default"), "rbac.authorization.k8s.io/v1", "RoleBinding", "rb1")]
#[case("/overview/cluster-overview/rbac/cluster-roles/view", None, "rbac.authorization.k8s.io/v1", "ClusterRole", "view")]
#[case("/overview/cluster-overview/rbac/cluster-roles/view", Some("default"), "rbac.authorization.k8s.io/v1", "ClusterRole", "view")]
fn for_gvk_test(
    #[case] expected: &str,
    #[case] namespace: Option<&str>,
    #[case] api_version: &str,
    #[case] kind: &str,
    #[case] name: &str,
) {
    let links = PathLinkGenerator::new("/overview/");
    let link = links.for_gvk(namespace, api_version, kind, name, name).unwrap();

    assert_eq!(Link::new(name, expected), link);
}

#[test]
fn for_gvk_errors_test() {
    let links = PathLinkGenerator::new("/overview");

    assert_eq!(
        Err(LinkError::UnsupportedKind {
            api_version: "example.com/v1".into(),
            kind: "Widget".into(),
        }),
        links.for_gvk(Some("default"), "example.com/v1", "Widget", "w", "w")
    );
    assert_eq!(
        Err(LinkError::MissingName { kind: "Pod".into() }),
        links.for_gvk(Some("default"), "v1", "Pod", "", "")
    );
    assert_eq!(
        Err(LinkError::MissingNamespace {
            kind: "Pod".into(),
            name: "web".into(),
        }),
        links.for_gvk(None, "v1", "Pod", "web", "web")
    );
}

#[test]
fn for_owner_uses_parent_namespace_test() {
    let links = PathLinkGenerator::new("/overview");
    let parent = ObjectRef {
        api_version: "v1".into(),
        kind: "ReplicationController".into(),
        namespace: Some("testing".into()),
        name: "rc".into(),
        uid: None,
    };
    let owner = OwnerReference {
        api_version: "apps/v1".into(),
        kind: "Deployment".into(),
        name: "web".into(),
        uid: "uid".into(),
        controller: Some(true),
        ..Default::default()
    };

    assert_eq!(
        Link::new("web", "/overview/namespace/testing/workloads/deployments/web"),
        links.for_owner(&parent, &owner).unwrap()
    );
}
