//! Section validation rules.
//!
//! Each rule is a presence check; a section is valid when none of its rules
//! fail. Only the first failure is reported.

use thiserror::Error;

use super::{FormState, SectionSchema};
use crate::domain::quiz::{QuestionBank, QuizAnswers};

/// A presence check over the form or quiz answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Text field must be non-empty after trimming.
    RequiredText { field: &'static str, message: &'static str },
    /// Checkbox must be ticked.
    RequiredFlag { field: &'static str, message: &'static str },
    /// Radio field must have a selection.
    RequiredChoice { field: &'static str, message: &'static str },
    /// Text field is required only while `when_field` is set to `equals`.
    RequiredTextWhen {
        field: &'static str,
        when_field: &'static str,
        equals: &'static str,
        message: &'static str,
    },
    /// Every quiz question must be answered.
    QuizComplete { message: &'static str },
}

impl Rule {
    pub const fn text(field: &'static str, message: &'static str) -> Self {
        Rule::RequiredText { field, message }
    }

    pub const fn flag(field: &'static str, message: &'static str) -> Self {
        Rule::RequiredFlag { field, message }
    }

    pub const fn choice(field: &'static str, message: &'static str) -> Self {
        Rule::RequiredChoice { field, message }
    }

    pub const fn text_when(
        field: &'static str,
        when_field: &'static str,
        equals: &'static str,
        message: &'static str,
    ) -> Self {
        Rule::RequiredTextWhen {
            field,
            when_field,
            equals,
            message,
        }
    }

    pub const fn quiz(message: &'static str) -> Self {
        Rule::QuizComplete { message }
    }

    /// Returns the rule's message if it fails against `ctx`.
    pub fn check(&self, ctx: &ValidationContext<'_>) -> Option<&'static str> {
        let failed = match self {
            Rule::RequiredText { field, .. } => ctx.form.text(field).trim().is_empty(),
            Rule::RequiredFlag { field, .. } => !ctx.form.flag(field),
            Rule::RequiredChoice { field, .. } => ctx.form.choice(field).is_none(),
            Rule::RequiredTextWhen {
                field,
                when_field,
                equals,
                ..
            } => ctx.form.choice(when_field) == Some(*equals) && ctx.form.text(field).trim().is_empty(),
            Rule::QuizComplete { .. } => !ctx.answers.is_complete(ctx.bank),
        };
        failed.then(|| self.message())
    }

    pub fn message(&self) -> &'static str {
        match self {
            Rule::RequiredText { message, .. }
            | Rule::RequiredFlag { message, .. }
            | Rule::RequiredChoice { message, .. }
            | Rule::RequiredTextWhen { message, .. }
            | Rule::QuizComplete { message } => message,
        }
    }
}

/// Everything a rule may inspect.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    pub form: &'a FormState,
    pub answers: &'a QuizAnswers,
    pub bank: &'a QuestionBank,
}

/// A section failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SectionIncomplete {
    /// 1-based section ordinal.
    pub section: usize,
    pub message: String,
}

/// Validates one section, reporting the first unmet requirement.
pub fn validate_section(
    section: usize,
    schema: &SectionSchema,
    ctx: &ValidationContext<'_>,
) -> Result<(), SectionIncomplete> {
    match schema.rules.iter().find_map(|rule| rule.check(ctx)) {
        Some(message) => Err(SectionIncomplete {
            section,
            message: message.to_string(),
        }),
        None => Ok(()),
    }
}

/// Validates sections in order and returns the first failure.
pub fn validate_all(sections: &[SectionSchema], ctx: &ValidationContext<'_>) -> Result<(), SectionIncomplete> {
    sections
        .iter()
        .enumerate()
        .try_for_each(|(idx, schema)| validate_section(idx + 1, schema, ctx))
}
