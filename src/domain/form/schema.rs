//! Declarative section schema: fields, rules, and render hints.

use serde::Serialize;

use super::{FieldSpec, Rule};

/// One step of a multi-section form.
///
/// Rules are evaluated in declaration order; the first failing rule is the
/// message the section reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionSchema {
    pub title: &'static str,
    pub tab_label: &'static str,
    pub intro: Vec<&'static str>,
    pub fields: Vec<FieldSpec>,
    /// Whether the quiz questions render in this section.
    pub includes_quiz: bool,
    #[serde(skip)]
    pub rules: Vec<Rule>,
}

impl SectionSchema {
    pub fn new(title: &'static str, tab_label: &'static str) -> Self {
        Self {
            title,
            tab_label,
            intro: Vec::new(),
            fields: Vec::new(),
            includes_quiz: false,
            rules: Vec::new(),
        }
    }

    pub fn intro(mut self, paragraph: &'static str) -> Self {
        self.intro.push(paragraph);
        self
    }

    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    pub fn quiz(mut self) -> Self {
        self.includes_quiz = true;
        self
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn field_spec(&self, id: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::FieldKind;

    #[test]
    fn builder_collects_fields_and_rules_in_order() {
        let schema = SectionSchema::new("Details", "Section 1: Details")
            .intro("Tell me about yourself.")
            .field(FieldSpec::new("first", "First", FieldKind::TextInput))
            .field(FieldSpec::new("last", "Last", FieldKind::TextInput))
            .rule(Rule::text("first", "Please enter your first name."))
            .rule(Rule::text("last", "Please enter your last name."));

        assert_eq!(schema.fields.len(), 2);
        assert_eq!(schema.fields[1].id, "last");
        assert_eq!(schema.rules.len(), 2);
        assert!(!schema.includes_quiz);
        assert!(schema.field_spec("first").is_some());
        assert!(schema.field_spec("middle").is_none());
    }
}
