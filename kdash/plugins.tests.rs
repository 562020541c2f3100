use super::*;

fn plugin(name: &str, printer: &[&str]) -> PluginConfig {
    PluginConfig {
        name: name.to_owned(),
        description: format!("{name} plugin"),
        command: format!("/usr/bin/{name}"),
        printer: printer.iter().map(|p| (*p).to_owned()).collect(),
        ..Default::default()
    }
}

#[test]
fn plugin_store_test() {
    let store = plugin_store(&[plugin("zeta", &[]), plugin("alpha", &["apps/v1/Deployment", "invalid"])]).unwrap();

    assert_eq!(vec!["alpha", "zeta"], store.names());
    assert_eq!(Some("/usr/bin/alpha"), store.get_command("alpha"));

    let capabilities = &store.get_metadata("alpha").unwrap().capabilities;
    assert!(capabilities.has_printer("apps/v1", "Deployment"));
    assert!(!capabilities.has_printer("v1", "Secret"));
    assert_eq!(1, capabilities.supports_printer_config.len());
    assert!(capabilities.supports_tab.is_empty());
}

#[test]
fn plugin_store_tab_and_module_test() {
    let mut config = plugin("tabs", &["v1/ServiceAccount"]);
    config.tab = true;
    config.module = true;

    let store = plugin_store(&[config]).unwrap();

    let capabilities = &store.get_metadata("tabs").unwrap().capabilities;
    assert_eq!(vec![GroupVersionKind::new("v1", "ServiceAccount")], capabilities.supports_tab);
    assert!(capabilities.is_module);
}

#[test]
fn plugin_store_empty_name_test() {
    assert!(matches!(plugin_store(&[plugin("", &[])]), Err(PluginError::EmptyName)));
}
