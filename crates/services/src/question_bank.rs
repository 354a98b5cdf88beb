use std::collections::BTreeMap;

use study_core::model::{Question, SubjectKey};

/// Immutable question catalog grouped by subject.
///
/// Built once at startup (from the remote catalog or the built-in demo
/// data) and never mutated afterwards. Unknown subject strings are
/// rejected earlier, when parsed into [`SubjectKey`].
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    by_subject: BTreeMap<SubjectKey, Vec<Question>>,
}

impl QuestionBank {
    #[must_use]
    pub fn from_questions(questions: Vec<Question>) -> Self {
        let mut by_subject: BTreeMap<SubjectKey, Vec<Question>> = BTreeMap::new();
        for question in questions {
            by_subject.entry(question.subject()).or_default().push(question);
        }
        Self { by_subject }
    }

    /// Bank backed by the built-in demo catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_questions(crate::demo_catalog::questions())
    }

    /// Questions for one subject; empty when the subject has no entries.
    #[must_use]
    pub fn questions_for(&self, subject: SubjectKey) -> &[Question] {
        self.by_subject
            .get(&subject)
            .map_or(&[], Vec::as_slice)
    }

    /// Total number of questions in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_subject.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_subject.values().all(Vec::is_empty)
    }

    /// Per-subject question counts, for catalog displays.
    #[must_use]
    pub fn subject_counts(&self) -> Vec<(SubjectKey, usize)> {
        self.by_subject
            .iter()
            .map(|(subject, questions)| (*subject, questions.len()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use study_core::model::QuestionId;

    fn question(id: &str, subject: SubjectKey) -> Question {
        Question::new(
            QuestionId::new(id),
            subject,
            "prompt",
            vec!["a".into(), "b".into()],
            0,
            "",
        )
        .unwrap()
    }

    #[test]
    fn groups_questions_by_subject() {
        let bank = QuestionBank::from_questions(vec![
            question("pt-1", SubjectKey::Portugues),
            question("mt-1", SubjectKey::Matematica),
            question("pt-2", SubjectKey::Portugues),
        ]);

        assert_eq!(bank.len(), 3);
        assert_eq!(bank.questions_for(SubjectKey::Portugues).len(), 2);
        assert_eq!(bank.questions_for(SubjectKey::Matematica).len(), 1);
    }

    #[test]
    fn missing_subject_reads_as_empty() {
        let bank = QuestionBank::from_questions(vec![question("pt-1", SubjectKey::Portugues)]);
        assert!(bank.questions_for(SubjectKey::Etica).is_empty());
    }

    #[test]
    fn builtin_catalog_is_usable_for_a_quick_session() {
        let bank = QuestionBank::builtin();
        assert!(bank.questions_for(SubjectKey::Portugues).len() >= 10);
        assert!(!bank.is_empty());
    }
}
