//! Session planning: sampling questions from the bank into a shuffled,
//! fixed-order plan.

use std::collections::BTreeSet;

use rand::Rng;
use rand::seq::SliceRandom;

use study_core::model::{Question, SessionType, SubjectKey};

use crate::error::SessionError;
use crate::question_bank::QuestionBank;

/// A fully sampled, ordered set of questions for one session run.
///
/// The question order is fixed at planning time; navigation and scoring
/// both index into it.
#[derive(Debug, Clone)]
pub struct SessionPlan {
    session_type: SessionType,
    subjects: Vec<SubjectKey>,
    questions: Vec<Question>,
}

impl SessionPlan {
    #[must_use]
    pub fn session_type(&self) -> SessionType {
        self.session_type
    }

    /// Subjects the plan draws from, deduplicated, in stable order.
    #[must_use]
    pub fn subjects(&self) -> &[SubjectKey] {
        &self.subjects
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Builds a [`SessionPlan`] by sampling the question bank.
///
/// Each selected subject contributes an even ceiling share of the target
/// count; the combined draw is shuffled and truncated to the target. When
/// the bank holds fewer questions than the target, the session simply runs
/// shorter.
#[derive(Debug)]
pub struct SessionPlanBuilder {
    session_type: SessionType,
    subjects: BTreeSet<SubjectKey>,
}

impl SessionPlanBuilder {
    #[must_use]
    pub fn new(session_type: SessionType) -> Self {
        Self {
            session_type,
            subjects: BTreeSet::new(),
        }
    }

    /// Add one subject to draw from. Duplicates are ignored.
    #[must_use]
    pub fn subject(mut self, subject: SubjectKey) -> Self {
        self.subjects.insert(subject);
        self
    }

    /// Add several subjects at once.
    #[must_use]
    pub fn subjects(mut self, subjects: impl IntoIterator<Item = SubjectKey>) -> Self {
        self.subjects.extend(subjects);
        self
    }

    /// Sample the bank with a thread-local RNG.
    ///
    /// # Errors
    ///
    /// `SessionError::NoSubjectSelected` when no subject was added, and
    /// `SessionError::NoQuestionsAvailable` when the selected subjects have
    /// no questions in the bank.
    pub fn build(self, bank: &QuestionBank) -> Result<SessionPlan, SessionError> {
        self.build_with_rng(bank, &mut rand::rng())
    }

    /// Sample the bank with a caller-provided RNG, for deterministic runs.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SessionPlanBuilder::build`].
    pub fn build_with_rng(
        self,
        bank: &QuestionBank,
        rng: &mut impl Rng,
    ) -> Result<SessionPlan, SessionError> {
        if self.subjects.is_empty() {
            return Err(SessionError::NoSubjectSelected);
        }

        let target = self.session_type.target_count();
        let per_subject = target.div_ceil(self.subjects.len());

        let mut drawn = Vec::with_capacity(target);
        for &subject in &self.subjects {
            let mut pool: Vec<Question> = bank.questions_for(subject).to_vec();
            pool.shuffle(rng);
            pool.truncate(per_subject);
            drawn.extend(pool);
        }

        if drawn.is_empty() {
            return Err(SessionError::NoQuestionsAvailable);
        }

        drawn.shuffle(rng);
        drawn.truncate(target);

        Ok(SessionPlan {
            session_type: self.session_type,
            subjects: self.subjects.into_iter().collect(),
            questions: drawn,
        })
    }
}
