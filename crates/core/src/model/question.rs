use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::SubjectKey;

/// Unique, stable identifier for a catalog question.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(String);

impl QuestionId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionId({})", self.0)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub const MIN_OPTIONS: usize = 2;
pub const MAX_OPTIONS: usize = 5;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question {id} has {len} options, expected between {MIN_OPTIONS} and {MAX_OPTIONS}")]
    OptionCountOutOfRange { id: QuestionId, len: usize },

    #[error("question {id} marks option {index} correct but only has {len} options")]
    CorrectOptionOutOfRange {
        id: QuestionId,
        index: usize,
        len: usize,
    },
}

/// Immutable multiple-choice question from the catalog.
///
/// Option order is significant and fixed per question; the correct option
/// is identified by its zero-based index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    subject: SubjectKey,
    prompt: String,
    options: Vec<String>,
    correct_option: usize,
    explanation: String,
}

impl Question {
    /// Build a validated question record.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::OptionCountOutOfRange` when the option list
    /// falls outside 2..=5 entries, and
    /// `QuestionError::CorrectOptionOutOfRange` when the correct index does
    /// not address an option.
    pub fn new(
        id: QuestionId,
        subject: SubjectKey,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_option: usize,
        explanation: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let len = options.len();
        if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&len) {
            return Err(QuestionError::OptionCountOutOfRange { id, len });
        }
        if correct_option >= len {
            return Err(QuestionError::CorrectOptionOutOfRange {
                id,
                index: correct_option,
                len,
            });
        }

        Ok(Self {
            id,
            subject,
            prompt: prompt.into(),
            options,
            correct_option,
            explanation: explanation.into(),
        })
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn subject(&self) -> SubjectKey {
        self.subject
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_option(&self) -> usize {
        self.correct_option
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Whether the given option index answers this question correctly.
    #[must_use]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_option
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("option {i}")).collect()
    }

    #[test]
    fn accepts_a_valid_question() {
        let q = Question::new(
            QuestionId::new("pt-1"),
            SubjectKey::Portugues,
            "prompt",
            options(4),
            2,
            "explanation",
        )
        .unwrap();

        assert_eq!(q.options().len(), 4);
        assert!(q.is_correct(2));
        assert!(!q.is_correct(0));
    }

    #[test]
    fn rejects_too_few_options() {
        let err = Question::new(
            QuestionId::new("pt-1"),
            SubjectKey::Portugues,
            "prompt",
            options(1),
            0,
            "",
        )
        .unwrap_err();
        assert!(matches!(err, QuestionError::OptionCountOutOfRange { len: 1, .. }));
    }

    #[test]
    fn rejects_too_many_options() {
        let err = Question::new(
            QuestionId::new("pt-1"),
            SubjectKey::Portugues,
            "prompt",
            options(6),
            0,
            "",
        )
        .unwrap_err();
        assert!(matches!(err, QuestionError::OptionCountOutOfRange { len: 6, .. }));
    }

    #[test]
    fn rejects_correct_index_past_the_options() {
        let err = Question::new(
            QuestionId::new("pt-1"),
            SubjectKey::Portugues,
            "prompt",
            options(3),
            3,
            "",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            QuestionError::CorrectOptionOutOfRange { index: 3, len: 3, .. }
        ));
    }
}
