use std::collections::BTreeMap;

use super::*;

const MANIFESTS: &str = r#"
apiVersion: v1
kind: Pod
metadata:
  name: web-2
  labels:
    app: web
---
apiVersion: v1
kind: Pod
metadata:
  name: web-1
  namespace: default
  labels:
    app: web
    tier: frontend
---
apiVersion: v1
kind: List
items:
  - apiVersion: v1
    kind: Pod
    metadata:
      name: db
      namespace: data
      labels:
        app: db
  - apiVersion: rbac.authorization.k8s.io/v1
    kind: ClusterRole
    metadata:
      name: view
---
"#;

fn store() -> MemoryStore {
    MemoryStore::from_yaml(MANIFESTS, "default").unwrap()
}

fn names(objects: &[DynamicObject]) -> Vec<String> {
    objects.iter().map(|o| o.name_any()).collect()
}

#[test]
fn from_yaml_flattens_lists_test() {
    let store = store();

    assert_eq!(4, store.objects().len());
    assert_eq!(None, store.objects()[0].metadata.namespace);
    assert_eq!("view", store.objects()[0].name_any());
}

#[test]
fn from_yaml_rejects_objects_without_kind_test() {
    let result = MemoryStore::from_yaml("metadata:\n  name: broken\n", "default");
    assert!(matches!(result, Err(StoreError::Invalid(_))));
}

#[tokio::test]
async fn list_by_namespace_test() {
    let store = store();

    let pods = store.list(&Key::new(Some("default"), "v1", "Pod")).await.unwrap();
    assert_eq!(vec!["web-1", "web-2"], names(&pods));

    let pods = store.list(&Key::new(None, "v1", "Pod")).await.unwrap();
    assert_eq!(vec!["db", "web-1", "web-2"], names(&pods));

    let pods = store.list(&Key::new(Some("default"), "apps/v1", "Pod")).await.unwrap();
    assert!(pods.is_empty());
}

#[tokio::test]
async fn list_by_selector_test() {
    let store = store();
    let selector = BTreeMap::from([("tier".to_owned(), "frontend".to_owned())]);

    let pods = store
        .list(&Key::new(Some("default"), "v1", "Pod").with_selector(selector))
        .await
        .unwrap();

    assert_eq!(vec!["web-1"], names(&pods));
}

#[tokio::test]
async fn get_test() {
    let store = store();

    let pod = store
        .get(&Key::new(Some("data"), "v1", "Pod").with_name("db"))
        .await
        .unwrap();
    assert_eq!(Some("db".to_owned()), pod.map(|p| p.name_any()));

    let missing = store
        .get(&Key::new(Some("default"), "v1", "Pod").with_name("db"))
        .await
        .unwrap();
    assert!(missing.is_none());
}
