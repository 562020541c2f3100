use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormFieldKind {
    Number,
    Hidden,
}

/// Single form input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormField {
    #[serde(rename = "type")]
    pub kind: FormFieldKind,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub label: String,

    pub name: String,
    pub value: String,
}

impl FormField {
    /// Creates new number input.
    pub fn number(label: impl Into<String>, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: FormFieldKind::Number,
            label: label.into(),
            name: name.into(),
            value: value.into(),
        }
    }

    /// Creates new hidden input.
    pub fn hidden(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: FormFieldKind::Hidden,
            label: String::new(),
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Form {
    pub fields: Vec<FormField>,
}

/// Action that can be triggered for a summary, e.g. an editor form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Action {
    pub name: String,
    pub title: String,
    pub form: Form,
}
