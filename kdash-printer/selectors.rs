use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, LabelSelectorRequirement};
use kdash_view::{Operator, Selector, Selectors};
use std::collections::BTreeMap;

#[cfg(test)]
#[path = "./selectors.tests.rs"]
mod selectors_tests;

/// Returns [`Selectors`] for the Kubernetes label selector.\
/// **Note** that expressions go first, in the order they were authored, followed by match labels.
pub fn print_selector(selector: &LabelSelector) -> Selectors {
    let mut selectors = Vec::new();
    for expression in selector.match_expressions.iter().flatten() {
        let Some(operator) = Operator::parse(&expression.operator) else {
            tracing::warn!("unknown selector operator '{}' for '{}'", expression.operator, expression.key);
            continue;
        };

        selectors.push(Selector::expression(
            &expression.key,
            operator,
            expression.values.clone().unwrap_or_default(),
        ));
    }

    selectors.extend(label_selectors(selector.match_labels.as_ref()));
    Selectors::new(selectors)
}

/// Returns [`Selectors`] for the plain `key=value` selector map.
pub fn print_selector_map(selector: Option<&BTreeMap<String, String>>) -> Selectors {
    Selectors::new(label_selectors(selector).collect())
}

/// Returns `true` if `labels` satisfy all match labels and expressions of the `selector`.
pub fn selector_matches(selector: &LabelSelector, labels: &BTreeMap<String, String>) -> bool {
    selector
        .match_labels
        .iter()
        .flatten()
        .all(|(k, v)| labels.get(k) == Some(v))
        && selector
            .match_expressions
            .iter()
            .flatten()
            .all(|e| expression_matches(e, labels))
}

fn label_selectors(selector: Option<&BTreeMap<String, String>>) -> impl Iterator<Item = Selector> + '_ {
    selector.into_iter().flatten().map(|(k, v)| Selector::label(k, v))
}

fn expression_matches(expression: &LabelSelectorRequirement, labels: &BTreeMap<String, String>) -> bool {
    let value = labels.get(&expression.key);
    let in_values = || {
        value.is_some_and(|v| expression.values.iter().flatten().any(|x| x == v))
    };

    match Operator::parse(&expression.operator) {
        Some(Operator::In) => in_values(),
        Some(Operator::NotIn) => !in_values(),
        Some(Operator::Exists) => value.is_some(),
        Some(Operator::DoesNotExist) => value.is_none(),
        None => false,
    }
}
