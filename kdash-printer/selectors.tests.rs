use rstest::rstest;

use super::*;

fn labels(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

fn requirement(key: &str, operator: &str, values: &[&str]) -> LabelSelectorRequirement {
    LabelSelectorRequirement {
        key: key.to_owned(),
        operator: operator.to_owned(),
        values: (!values.is_empty()).then(|| values.iter().map(|v| (*v).to_owned()).collect()),
    }
}

#[test]
fn print_selector_expressions_first_test() {
    let selector = LabelSelector {
        match_labels: Some(labels(&[("tier", "web"), ("app", "my_app")])),
        match_expressions: Some(vec![
            requirement("key", "In", &["value1", "value2"]),
            requirement("env", "Exists", &[]),
        ]),
    };

    let expected = Selectors::new(vec![
        Selector::expression("key", Operator::In, vec!["value1".to_owned(), "value2".to_owned()]),
        Selector::expression("env", Operator::Exists, Vec::new()),
        Selector::label("app", "my_app"),
        Selector::label("tier", "web"),
    ]);

    assert_eq!(expected, print_selector(&selector));
}

#[test]
fn print_selector_skips_unknown_operator_test() {
    let selector = LabelSelector {
        match_labels: None,
        match_expressions: Some(vec![requirement("key", "Like", &["x"])]),
    };

    assert!(print_selector(&selector).selectors.is_empty());
}

#[test]
fn print_selector_map_test() {
    let map = labels(&[("b", "2"), ("a", "1")]);

    let expected = Selectors::new(vec![Selector::label("a", "1"), Selector::label("b", "2")]);
    assert_eq!(expected, print_selector_map(Some(&map)));
    assert!(print_selector_map(None).selectors.is_empty());
}

#[rstest]
#[case(requirement("app", "In", &["web", "api"]), true)]
#[case(requirement("app", "NotIn", &["web"]), false)]
#[case(requirement("tier", "NotIn", &["web"]), true)]
#[case(requirement("app", "Exists", &[]), true)]
#[case(requirement("tier", "Exists", &[]), false)]
#[case(requirement("tier", "DoesNotExist", &[]), true)]
#[case(requirement("app", "Unknown", &[]), false)]
fn selector_matches_expression_test(#[case] expression: LabelSelectorRequirement, #[case] expected: bool) {
    let selector = LabelSelector {
        match_labels: Some(labels(&[("app", "web")])),
        match_expressions: Some(vec![expression]),
    };

    assert_eq!(expected, selector_matches(&selector, &labels(&[("app", "web"), ("zone", "a")])));
}

#[test]
fn selector_matches_labels_test() {
    let selector = LabelSelector {
        match_labels: Some(labels(&[("app", "web")])),
        match_expressions: None,
    };

    assert!(selector_matches(&selector, &labels(&[("app", "web"), ("tier", "front")])));
    assert!(!selector_matches(&selector, &labels(&[("app", "db")])));
    assert!(selector_matches(&LabelSelector::default(), &labels(&[])));
}
