//! FormState - the mutable field values of one session.

use std::collections::BTreeMap;

use super::{FieldKind, FieldValue, SectionSchema};
use crate::domain::foundation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
struct FieldSlot {
    kind: FieldKind,
    value: FieldValue,
}

/// Field id → current value, for every field declared by a set of sections.
///
/// Writes are checked against the declared field kind; radio fields only
/// accept one of their declared choices.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    fields: BTreeMap<&'static str, FieldSlot>,
}

impl FormState {
    /// Builds a form with every field of `sections` at its initial value.
    pub fn from_sections(sections: &[SectionSchema]) -> Self {
        let fields = sections
            .iter()
            .flat_map(|s| s.fields.iter())
            .map(|spec| {
                (
                    spec.id,
                    FieldSlot {
                        kind: spec.kind,
                        value: spec.initial_value(),
                    },
                )
            })
            .collect();
        Self { fields }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.fields.contains_key(id)
    }

    pub fn value(&self, id: &str) -> Option<&FieldValue> {
        self.fields.get(id).map(|slot| &slot.value)
    }

    /// Text of a text field; empty for unknown or non-text fields.
    pub fn text(&self, id: &str) -> &str {
        match self.value(id) {
            Some(FieldValue::Text(s)) => s,
            _ => "",
        }
    }

    /// State of a checkbox; false for unknown or non-flag fields.
    pub fn flag(&self, id: &str) -> bool {
        matches!(self.value(id), Some(FieldValue::Flag(true)))
    }

    /// Selected value of a radio field, if any.
    pub fn choice(&self, id: &str) -> Option<&str> {
        match self.value(id) {
            Some(FieldValue::Choice(Some(s))) => Some(s),
            _ => None,
        }
    }

    /// Replaces the value of field `id`.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if the field is unknown or the value type does not
    ///   match the field kind
    /// - `InvalidFormat` if a radio value is not one of the declared choices
    pub fn set(&mut self, id: &str, value: FieldValue) -> Result<(), ValidationError> {
        let slot = self
            .fields
            .get_mut(id)
            .ok_or_else(|| ValidationError::invalid_format(id, "unknown field"))?;

        if !slot.value.same_type(&value) {
            return Err(ValidationError::invalid_format(
                id,
                format!("expected {} value, got {}", slot.value.type_name(), value.type_name()),
            ));
        }

        if let FieldValue::Choice(Some(selected)) = &value {
            if !slot.kind.choices().iter().any(|c| c.value == selected.as_str()) {
                return Err(ValidationError::invalid_format(
                    id,
                    format!("'{}' is not an allowed choice", selected),
                ));
            }
        }

        slot.value = value;
        Ok(())
    }

    pub fn set_text(&mut self, id: &str, text: impl Into<String>) -> Result<(), ValidationError> {
        self.set(id, FieldValue::Text(text.into()))
    }

    pub fn set_flag(&mut self, id: &str, flag: bool) -> Result<(), ValidationError> {
        self.set(id, FieldValue::Flag(flag))
    }

    pub fn set_choice(&mut self, id: &str, choice: impl Into<String>) -> Result<(), ValidationError> {
        self.set(id, FieldValue::Choice(Some(choice.into())))
    }
}
