//! Field specifications and values for declarative form sections.

use serde::Serialize;

/// One allowed value of a radio field, with the text shown beside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChoiceSpec {
    pub value: &'static str,
    pub label: &'static str,
}

impl ChoiceSpec {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// How a field is rendered and which value type it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    Checkbox { label: &'static str },
    TextInput,
    TextArea,
    Date,
    Radio { choices: &'static [ChoiceSpec] },
}

impl FieldKind {
    /// The value a fresh form starts with for this kind.
    pub fn empty_value(&self) -> FieldValue {
        match self {
            FieldKind::Checkbox { .. } => FieldValue::Flag(false),
            FieldKind::TextInput | FieldKind::TextArea | FieldKind::Date => {
                FieldValue::Text(String::new())
            }
            FieldKind::Radio { .. } => FieldValue::Choice(None),
        }
    }

    /// Allowed values for radio fields; empty for other kinds.
    pub fn choices(&self) -> &'static [ChoiceSpec] {
        match self {
            FieldKind::Radio { choices } => choices,
            _ => &[],
        }
    }
}

/// A single input of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub id: &'static str,
    pub prompt: &'static str,
    pub kind: FieldKind,
    /// Preselected choice, if any.
    pub default_choice: Option<&'static str>,
}

impl FieldSpec {
    pub const fn new(id: &'static str, prompt: &'static str, kind: FieldKind) -> Self {
        Self {
            id,
            prompt,
            kind,
            default_choice: None,
        }
    }

    pub const fn with_default(mut self, value: &'static str) -> Self {
        self.default_choice = Some(value);
        self
    }

    /// The value this field holds in a freshly reset form.
    pub fn initial_value(&self) -> FieldValue {
        match (self.kind, self.default_choice) {
            (FieldKind::Radio { .. }, Some(value)) => FieldValue::Choice(Some(value.to_string())),
            (kind, _) => kind.empty_value(),
        }
    }
}

/// Current value of a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Choice(Option<String>),
}

impl FieldValue {
    /// Short name of the value type, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Flag(_) => "flag",
            FieldValue::Choice(_) => "choice",
        }
    }

    pub fn same_type(&self, other: &FieldValue) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}
