use super::*;

#[test]
fn empty_yaml_uses_defaults_test() {
    let config = Config::from_yaml("{}").unwrap();
    assert_eq!(Config::default(), config);
}

#[test]
fn plugins_are_parsed_test() {
    let yaml = r#"
namespace: apps
show_labels: false
plugins:
  - name: sample
    description: sample plugin
    printer: ["apps/v1/Deployment"]
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!("apps", config.namespace);
    assert_eq!(DEFAULT_LINK_PREFIX, config.link_prefix);
    assert!(!config.show_labels);
    assert_eq!(1, config.plugins.len());
    assert_eq!("sample", config.plugins[0].name);
    assert_eq!(vec!["apps/v1/Deployment".to_owned()], config.plugins[0].printer);
    assert!(!config.plugins[0].tab);
}

#[tokio::test]
async fn load_or_create_writes_default_test() {
    let dir = std::env::temp_dir().join(format!("kdash-config-test-{}", std::process::id()));
    let path = dir.join("config.yaml");
    let _ = tokio::fs::remove_dir_all(&dir).await;

    let created = Config::load_or_create(&path).await.unwrap();
    assert!(path.exists());

    let loaded = Config::load_or_create(&path).await.unwrap();
    assert_eq!(created, loaded);

    let _ = tokio::fs::remove_dir_all(&dir).await;
}
