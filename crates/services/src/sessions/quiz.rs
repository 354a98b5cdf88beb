//! The in-flight quiz session state machine.

use chrono::{DateTime, Utc};

use study_core::model::{Question, SessionId, SessionResult};

use crate::error::SessionError;
use crate::sessions::plan::SessionPlan;

/// Lightweight answered/total snapshot for progress displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub position: usize,
    pub answered: usize,
    pub total: usize,
}

/// What the UI should do when the user asks to finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishPrompt {
    /// Every question is answered; finish immediately.
    Ready,
    /// Some questions are unanswered; ask for confirmation first.
    ConfirmPartial { unanswered: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionState {
    Active,
    Finished,
}

/// A running quiz over a fixed [`SessionPlan`].
///
/// All mutations are rejected with [`SessionError::InvalidSessionState`]
/// once the session has finished; a rejected call never changes state.
#[derive(Debug, Clone)]
pub struct QuizSession {
    id: SessionId,
    plan: SessionPlan,
    answers: Vec<Option<usize>>,
    current: usize,
    started_at: DateTime<Utc>,
    state: SessionState,
}

impl QuizSession {
    /// Start a session over a plan, stamping the start time.
    #[must_use]
    pub fn start(plan: SessionPlan, started_at: DateTime<Utc>) -> Self {
        let len = plan.len();
        Self {
            id: SessionId::generate(),
            plan,
            answers: vec![None; len],
            current: 0,
            started_at,
            state: SessionState::Active,
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn plan(&self) -> &SessionPlan {
        &self.plan
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Finished
    }

    /// Zero-based position of the question currently shown.
    #[must_use]
    pub fn position(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.plan.questions()[self.current]
    }

    /// The recorded answer for the question at `position`, if any.
    #[must_use]
    pub fn answer_at(&self, position: usize) -> Option<usize> {
        self.answers.get(position).copied().flatten()
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            position: self.current,
            answered: self.answers.iter().filter(|a| a.is_some()).count(),
            total: self.answers.len(),
        }
    }

    fn ensure_active(&self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Active => Ok(()),
            SessionState::Finished => Err(SessionError::InvalidSessionState),
        }
    }

    /// Record (or overwrite) the answer for the current question.
    ///
    /// # Errors
    ///
    /// `InvalidSessionState` after finish, `InvalidOptionIndex` when the
    /// option does not exist on the current question.
    pub fn select_answer(&mut self, option: usize) -> Result<(), SessionError> {
        self.ensure_active()?;
        let len = self.current_question().options().len();
        if option >= len {
            return Err(SessionError::InvalidOptionIndex { given: option, len });
        }
        self.answers[self.current] = Some(option);
        Ok(())
    }

    /// Move forward one question, clamping at the last.
    ///
    /// # Errors
    ///
    /// `InvalidSessionState` after finish.
    pub fn next_question(&mut self) -> Result<(), SessionError> {
        self.ensure_active()?;
        if self.current + 1 < self.answers.len() {
            self.current += 1;
        }
        Ok(())
    }

    /// Move back one question, clamping at the first.
    ///
    /// # Errors
    ///
    /// `InvalidSessionState` after finish.
    pub fn previous_question(&mut self) -> Result<(), SessionError> {
        self.ensure_active()?;
        self.current = self.current.saturating_sub(1);
        Ok(())
    }

    /// Jump straight to the question at `position`.
    ///
    /// # Errors
    ///
    /// `InvalidSessionState` after finish, `IndexOutOfRange` when the
    /// position does not address a question of this session.
    pub fn go_to_position(&mut self, position: usize) -> Result<(), SessionError> {
        self.ensure_active()?;
        let len = self.answers.len();
        if position >= len {
            return Err(SessionError::IndexOutOfRange { given: position, len });
        }
        self.current = position;
        Ok(())
    }

    /// What finishing now would entail, without changing anything.
    ///
    /// # Errors
    ///
    /// `InvalidSessionState` after finish.
    pub fn finish_prompt(&self) -> Result<FinishPrompt, SessionError> {
        self.ensure_active()?;
        let unanswered = self.answers.iter().filter(|a| a.is_none()).count();
        Ok(if unanswered == 0 {
            FinishPrompt::Ready
        } else {
            FinishPrompt::ConfirmPartial { unanswered }
        })
    }

    /// Finish the session and score it.
    ///
    /// Unanswered questions count toward the total but not toward correct
    /// or wrong. The session transitions to finished; every later mutation
    /// is rejected.
    ///
    /// # Errors
    ///
    /// `InvalidSessionState` when already finished.
    pub fn finish(&mut self, completed_at: DateTime<Utc>) -> Result<SessionResult, SessionError> {
        self.ensure_active()?;

        let mut correct = 0;
        let mut wrong = 0;
        let mut unanswered = 0;
        for (question, answer) in self.plan.questions().iter().zip(&self.answers) {
            match answer {
                Some(option) if question.is_correct(*option) => correct += 1,
                Some(_) => wrong += 1,
                None => unanswered += 1,
            }
        }

        let elapsed = (completed_at - self.started_at).num_seconds().max(0);
        #[allow(clippy::cast_sign_loss)]
        let elapsed_seconds = elapsed as u64;

        let result = SessionResult::from_counts(
            self.id,
            self.plan.session_type(),
            self.plan.subjects().to_vec(),
            correct,
            wrong,
            unanswered,
            self.answers.len(),
            elapsed_seconds,
            completed_at,
        )?;

        self.state = SessionState::Finished;
        Ok(result)
    }
}
