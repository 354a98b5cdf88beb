//! Ties a quiz session's lifecycle to progress tracking and the outbox.

use std::sync::Arc;

use rand::Rng;

use study_core::Clock;
use study_core::model::{SessionResult, SessionType, SubjectKey};

use crate::error::SessionError;
use crate::progress_service::ProgressService;
use crate::question_bank::QuestionBank;
use crate::remote::ResultOutbox;
use crate::sessions::plan::SessionPlanBuilder;
use crate::sessions::quiz::QuizSession;

/// Orchestrates session start and finish around the shared services.
///
/// The session itself stays a plain value owned by the caller; the
/// workflow only stamps times, books the outcome into progress, and hands
/// the result to the outbox.
pub struct SessionWorkflow {
    clock: Clock,
    bank: QuestionBank,
    progress: Arc<ProgressService>,
    outbox: ResultOutbox,
}

impl SessionWorkflow {
    #[must_use]
    pub fn new(
        clock: Clock,
        bank: QuestionBank,
        progress: Arc<ProgressService>,
        outbox: ResultOutbox,
    ) -> Self {
        Self {
            clock,
            bank,
            progress,
            outbox,
        }
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Plan and start a session over the selected subjects.
    ///
    /// # Errors
    ///
    /// `NoSubjectSelected` when `subjects` is empty and
    /// `NoQuestionsAvailable` when the bank has nothing for the selection.
    pub fn start(
        &self,
        session_type: SessionType,
        subjects: impl IntoIterator<Item = SubjectKey>,
    ) -> Result<QuizSession, SessionError> {
        let plan = SessionPlanBuilder::new(session_type)
            .subjects(subjects)
            .build(&self.bank)?;
        Ok(QuizSession::start(plan, self.clock.now()))
    }

    /// Deterministic variant of [`SessionWorkflow::start`] for tests.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SessionWorkflow::start`].
    pub fn start_with_rng(
        &self,
        session_type: SessionType,
        subjects: impl IntoIterator<Item = SubjectKey>,
        rng: &mut impl Rng,
    ) -> Result<QuizSession, SessionError> {
        let plan = SessionPlanBuilder::new(session_type)
            .subjects(subjects)
            .build_with_rng(&self.bank, rng)?;
        Ok(QuizSession::start(plan, self.clock.now()))
    }

    /// Finish the session, book the outcome, and hand it to the outbox.
    ///
    /// Progress updates and delivery are best-effort; only scoring itself
    /// can fail here.
    ///
    /// # Errors
    ///
    /// `InvalidSessionState` when the session already finished.
    pub async fn finish(&self, session: &mut QuizSession) -> Result<SessionResult, SessionError> {
        let now = self.clock.now();
        let result = session.finish(now)?;

        self.progress.record_result(&result).await;
        self.progress.update_streak(&self.clock).await;
        self.outbox.push(&result).await;

        Ok(result)
    }
}
