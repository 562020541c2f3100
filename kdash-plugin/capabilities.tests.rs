use k8s_openapi::serde_json;

use super::*;

#[test]
fn parse_gvk_test() {
    assert_eq!(
        Some(GroupVersionKind {
            group: "apps".into(),
            version: "v1".into(),
            kind: "Deployment".into(),
        }),
        GroupVersionKind::parse("apps/v1/Deployment")
    );
    assert_eq!(
        Some(GroupVersionKind {
            group: "".into(),
            version: "v1".into(),
            kind: "Pod".into(),
        }),
        GroupVersionKind::parse("v1/Pod")
    );
    assert_eq!(None, GroupVersionKind::parse("Pod"));
    assert_eq!(None, GroupVersionKind::parse("v1/"));
}

#[test]
fn has_printer_test() {
    let capabilities = Capabilities {
        supports_printer_status: vec![GroupVersionKind::new("apps/v1", "Deployment")],
        supports_tab: vec![GroupVersionKind::new("v1", "Pod")],
        ..Default::default()
    };

    assert!(capabilities.has_printer("apps/v1", "Deployment"));
    assert!(!capabilities.has_printer("v1", "Pod"));
    assert!(!capabilities.has_printer("extensions/v1beta1", "Deployment"));
}

#[test]
fn empty_capabilities_serialization_test() {
    let json = serde_json::to_string(&Capabilities::default()).unwrap();

    assert_eq!(
        r#"{"supportsPrinterConfig":[],"supportsPrinterStatus":[],"supportsPrinterItems":[],"supportsObjectStatus":[],"supportsTab":[],"isModule":false,"actionNames":[]}"#,
        json
    );
}
