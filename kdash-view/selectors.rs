use serde::Serialize;

/// Label selector requirement operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operator {
    In,
    NotIn,
    Exists,
    DoesNotExist,
}

impl Operator {
    /// Parses operator used in Kubernetes `matchExpressions`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "In" => Some(Operator::In),
            "NotIn" => Some(Operator::NotIn),
            "Exists" => Some(Operator::Exists),
            "DoesNotExist" => Some(Operator::DoesNotExist),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelSelector {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpressionSelector {
    pub key: String,
    pub operator: Operator,
    pub values: Vec<String>,
}

/// Single selector, either `key=value` or an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Selector {
    Label(LabelSelector),
    Expression(ExpressionSelector),
}

impl Selector {
    /// Creates new label selector.
    pub fn label(key: impl Into<String>, value: impl Into<String>) -> Self {
        Selector::Label(LabelSelector {
            key: key.into(),
            value: value.into(),
        })
    }

    /// Creates new expression selector.
    pub fn expression(key: impl Into<String>, operator: Operator, values: Vec<String>) -> Self {
        Selector::Expression(ExpressionSelector {
            key: key.into(),
            operator,
            values,
        })
    }
}

/// Set of selectors.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Selectors {
    pub selectors: Vec<Selector>,
}

impl Selectors {
    /// Creates new [`Selectors`] instance.
    pub fn new(selectors: Vec<Selector>) -> Self {
        Self { selectors }
    }
}
