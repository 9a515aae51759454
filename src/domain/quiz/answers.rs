//! Answer selections and the records derived from them at submit time.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Category, QuestionBank};
use crate::domain::foundation::ValidationError;

/// One answered question, as sent along with the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub index: usize,
    pub question: String,
    pub answer: String,
    #[serde(rename = "trait")]
    pub category: Category,
}

impl AnswerRecord {
    /// Builds a record with only a category, for callers that score raw
    /// category sequences.
    pub fn bare(index: usize, category: Category) -> Self {
        Self {
            index,
            question: String::new(),
            answer: String::new(),
            category,
        }
    }
}

/// Per-question selections of the active session.
///
/// Unanswered questions are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizAnswers {
    selections: BTreeMap<usize, Category>,
}

impl QuizAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records (or replaces) the selection for question `index`.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if `bank` has no questions
    /// - `OutOfRange` if `index` is not a question of `bank`
    pub fn select(
        &mut self,
        bank: &QuestionBank,
        index: usize,
        category: Category,
    ) -> Result<(), ValidationError> {
        if bank.is_empty() {
            return Err(ValidationError::invalid_format("question", "question bank is empty"));
        }
        if index >= bank.len() {
            return Err(ValidationError::out_of_range("question", 0, bank.len() - 1, index));
        }
        self.selections.insert(index, category);
        Ok(())
    }

    pub fn selection(&self, index: usize) -> Option<Category> {
        self.selections.get(&index).copied()
    }

    pub fn answered_count(&self) -> usize {
        self.selections.len()
    }

    /// Index of the first question without a selection, if any.
    pub fn first_unanswered(&self, bank: &QuestionBank) -> Option<usize> {
        (0..bank.len()).find(|idx| !self.selections.contains_key(idx))
    }

    /// True when every question of `bank` has a selection.
    pub fn is_complete(&self, bank: &QuestionBank) -> bool {
        self.first_unanswered(bank).is_none()
    }

    pub fn clear(&mut self) {
        self.selections.clear();
    }

    /// Derives answer records in question order.
    ///
    /// Unanswered questions are skipped, so an incomplete set yields a
    /// shorter list.
    pub fn records(&self, bank: &QuestionBank) -> Vec<AnswerRecord> {
        bank.iter()
            .enumerate()
            .filter_map(|(index, question)| {
                let category = self.selection(index)?;
                let option = question.option_for(category)?;
                Some(AnswerRecord {
                    index,
                    question: question.text.to_string(),
                    answer: option.text.to_string(),
                    category,
                })
            })
            .collect()
    }
}
