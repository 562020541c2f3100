use k8s_openapi::chrono::DateTime;
use k8s_openapi::serde_json::{self, json};
use std::collections::BTreeMap;

use crate::*;

#[test]
fn text_serialization_test() {
    let text: Component = Text::new("2").into();

    assert_eq!(
        json!({"metadata": {"type": "text"}, "config": {"value": "2"}}),
        serde_json::to_value(&text).unwrap()
    );
}

#[test]
fn link_and_timestamp_serialization_test() {
    let link: Component = Link::new("nginx", "/overview/namespace/default/workloads/deployments/nginx").into();
    let time: Component = Timestamp::new(DateTime::from_timestamp(1_546_300_800, 0).unwrap()).into();

    assert_eq!(
        json!({"metadata": {"type": "link"}, "config": {"value": "nginx", "ref": "/overview/namespace/default/workloads/deployments/nginx"}}),
        serde_json::to_value(&link).unwrap()
    );
    assert_eq!(
        json!({"metadata": {"type": "timestamp"}, "config": {"timestamp": 1_546_300_800}}),
        serde_json::to_value(&time).unwrap()
    );
}

#[test]
fn table_serialization_test() {
    let mut table = Table::new("Secrets", "We couldn't find any secrets!", table_cols(&["Name"]));
    table.add(TableRow::new().with("Name", Text::new("token"))).unwrap();

    let value = serde_json::to_value(Component::from(table)).unwrap();

    assert_eq!("table", value["metadata"]["type"]);
    assert_eq!("Secrets", value["metadata"]["title"][0]["config"]["value"]);
    assert_eq!("We couldn't find any secrets!", value["config"]["emptyContent"]);
    assert_eq!(json!([{"name": "Name", "accessor": "Name"}]), value["config"]["columns"]);
    assert_eq!("token", value["config"]["rows"][0]["Name"]["config"]["value"]);
}

#[test]
fn selectors_serialization_test() {
    let selectors: Component = Selectors::new(vec![
        Selector::expression("key", Operator::In, vec!["value1".into()]),
        Selector::label("app", "my_app"),
    ])
    .into();

    assert_eq!(
        json!({
            "metadata": {"type": "selectors"},
            "config": {"selectors": [
                {"metadata": {"type": "expressionSelector"}, "config": {"key": "key", "operator": "In", "values": ["value1"]}},
                {"metadata": {"type": "labelSelector"}, "config": {"key": "app", "value": "my_app"}},
            ]}
        }),
        serde_json::to_value(&selectors).unwrap()
    );
}

#[test]
fn summary_with_action_serialization_test() {
    let mut summary = Summary::new("Configuration", vec![SummarySection::new("Replicas", Text::new("3"))]);
    summary.add_action(Action {
        name: "Edit".into(),
        title: "Deployment Editor".into(),
        form: Form {
            fields: vec![FormField::number("Replicas", "replicas", "3"), FormField::hidden("kind", "Deployment")],
        },
    });

    let value = serde_json::to_value(Component::from(summary)).unwrap();

    assert_eq!("Replicas", value["config"]["sections"][0]["header"]);
    assert_eq!("3", value["config"]["sections"][0]["content"]["config"]["value"]);
    assert_eq!(
        json!({"name": "Edit", "title": "Deployment Editor", "form": {"fields": [
            {"type": "number", "label": "Replicas", "name": "replicas", "value": "3"},
            {"type": "hidden", "name": "kind", "value": "Deployment"},
        ]}}),
        value["config"]["actions"][0]
    );
}

#[test]
fn quadrant_serialization_test() {
    let mut quadrant = Quadrant::new("Status");
    quadrant.set(QuadrantPosition::NW, "Running", "3");
    quadrant.set(QuadrantPosition::SE, "Failed", "0");

    let value = serde_json::to_value(Component::from(quadrant)).unwrap();

    assert_eq!(json!({"label": "Running", "value": "3"}), value["config"]["nw"]);
    assert_eq!(json!({"label": "Failed", "value": "0"}), value["config"]["se"]);
    assert_eq!(json!({"label": "", "value": ""}), value["config"]["ne"]);
}

#[test]
fn serialization_is_deterministic_test() {
    let build = || {
        let labels: BTreeMap<String, String> = [("b", "2"), ("a", "1"), ("c", "3")]
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();

        let mut layout = FlexLayout::new("Summary");
        let mut list = List::new("", Vec::new());
        list.add(Labels::new(labels));
        layout.add_section().add(list, Width::Full).unwrap();
        Component::from(layout)
    };

    let first = serde_json::to_string(&build()).unwrap();
    let second = serde_json::to_string(&build()).unwrap();

    assert_eq!(first, second);
    assert!(first.contains(r#"{"labels":{"a":"1","b":"2","c":"3"}}"#));
}
