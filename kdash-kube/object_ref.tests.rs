use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::serde_json::json;
use kube::core::TypeMeta;

use super::*;

#[test]
fn from_resource_test() {
    let deployment = Deployment {
        metadata: ObjectMeta {
            name: Some("nginx".into()),
            namespace: Some("default".into()),
            uid: Some("uid-1".into()),
            ..Default::default()
        },
        ..Default::default()
    };

    let object = ObjectRef::from_resource(&deployment);

    assert_eq!("apps/v1", object.api_version);
    assert_eq!("Deployment", object.kind);
    assert_eq!("apps", object.group());
    assert_eq!("v1", object.version());
    assert_eq!(Some("default"), object.namespace.as_deref());
    assert_eq!("nginx", object.name);
    assert_eq!(Some("uid-1"), object.uid.as_deref());
    assert!(object.is("apps/v1", "Deployment"));
}

#[test]
fn from_dynamic_test() {
    let dynamic = DynamicObject {
        types: Some(TypeMeta {
            api_version: "v1".into(),
            kind: "Secret".into(),
        }),
        metadata: ObjectMeta {
            name: Some("token".into()),
            ..Default::default()
        },
        data: json!({}),
    };

    let object = ObjectRef::from_dynamic(&dynamic);

    assert_eq!("", object.group());
    assert_eq!("v1", object.version());
    assert_eq!("Secret", object.kind);
    assert_eq!(None, object.namespace);
}

#[test]
fn is_cluster_scoped_test() {
    assert!(is_cluster_scoped("rbac.authorization.k8s.io/v1", "ClusterRole"));
    assert!(is_cluster_scoped("v1", "Namespace"));
    assert!(!is_cluster_scoped("rbac.authorization.k8s.io/v1", "Role"));
    assert!(!is_cluster_scoped("apps/v1", "Deployment"));
}
