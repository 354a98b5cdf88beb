//! Durable progress tracking over the storage layer.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use tracing::warn;

use storage::repository::ProgressRepository;
use study_core::Clock;
use study_core::model::{
    ActivityEntry, ProgressState, SessionResult, StatKey, SubjectKey, ThemePreference,
};

use crate::error::ProgressServiceError;

/// Single owner of the in-memory [`ProgressState`], writing it through to
/// the repository after every mutation.
///
/// Writes are best-effort: a failed save is logged and the in-memory state
/// stays authoritative, so a flaky disk degrades durability, not the
/// session in progress.
pub struct ProgressService {
    repo: Arc<dyn ProgressRepository>,
    state: Mutex<ProgressState>,
}

impl ProgressService {
    /// Load the persisted state, falling back to defaults when no record
    /// exists (first run, or an unreadable one).
    ///
    /// # Errors
    ///
    /// Propagates storage errors from the initial load; after that the
    /// service never fails on persistence.
    pub async fn load(repo: Arc<dyn ProgressRepository>) -> Result<Self, ProgressServiceError> {
        let state = repo.load().await?.unwrap_or_default();
        Ok(Self {
            repo,
            state: Mutex::new(state),
        })
    }

    /// A point-in-time copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> ProgressState {
        self.lock().clone()
    }

    /// Record a finished session: history, counters, and an activity entry.
    pub async fn record_result(&self, result: &SessionResult) {
        let snapshot = {
            let mut state = self.lock();
            state.increment_stat(StatKey::QuestionsAnswered, result.total() as u64);
            state.increment_stat(StatKey::CorrectAnswers, result.correct() as u64);
            state.add_activity(ActivityEntry {
                kind: study_core::model::ActivityKind::Session,
                title: result.session_type().display_name().to_string(),
                detail: format!(
                    "{}/{} acertos ({}%)",
                    result.correct(),
                    result.total(),
                    result.percentage()
                ),
                timestamp: result.completed_at(),
            });
            state.record_result(result.clone());
            state.clone()
        };
        self.persist(snapshot).await;
    }

    /// Bump the consecutive-day streak against the clock and return it.
    pub async fn update_streak(&self, clock: &Clock) -> u32 {
        let (streak, snapshot) = {
            let mut state = self.lock();
            let streak = state.update_streak(clock);
            (streak, state.clone())
        };
        self.persist(snapshot).await;
        streak
    }

    /// Add `amount` to one aggregate counter and return the new value.
    pub async fn increment_stat(&self, key: StatKey, amount: u64) -> u64 {
        let (value, snapshot) = {
            let mut state = self.lock();
            let value = state.increment_stat(key, amount);
            (value, state.clone())
        };
        self.persist(snapshot).await;
        value
    }

    /// Set a subject's progress percentage, clamped into 0..=100.
    pub async fn set_subject_progress(&self, subject: SubjectKey, percent: u8) {
        let snapshot = {
            let mut state = self.lock();
            state.set_subject_progress(subject, percent);
            state.clone()
        };
        self.persist(snapshot).await;
    }

    /// Prepend an entry to the recent-activity feed.
    pub async fn add_activity(&self, entry: ActivityEntry) {
        let snapshot = {
            let mut state = self.lock();
            state.add_activity(entry);
            state.clone()
        };
        self.persist(snapshot).await;
    }

    /// Count one completed focus block.
    pub async fn record_focus_session(&self, completed_at: DateTime<Utc>) {
        let snapshot = {
            let mut state = self.lock();
            state.increment_stat(StatKey::FocusSessions, 1);
            state.add_activity(ActivityEntry {
                kind: study_core::model::ActivityKind::Focus,
                title: "Sessão de foco concluída".to_string(),
                detail: String::new(),
                timestamp: completed_at,
            });
            state.clone()
        };
        self.persist(snapshot).await;
    }

    pub async fn set_theme(&self, theme: ThemePreference) {
        let snapshot = {
            let mut state = self.lock();
            state.set_theme(theme);
            state.clone()
        };
        self.persist(snapshot).await;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ProgressState> {
        // A poisoned lock means a panic mid-update; the state itself is
        // still valid, every mutation leaves it consistent.
        self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    async fn persist(&self, snapshot: ProgressState) {
        if let Err(err) = self.repo.save(&snapshot).await {
            warn!(error = %err, "failed to persist progress state");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use storage::repository::{InMemoryStore, ProgressRepository as _};
    use study_core::model::{SessionId, SessionType};
    use study_core::time::{fixed_clock, fixed_now};

    fn quick_result() -> SessionResult {
        SessionResult::from_counts(
            SessionId::generate(),
            SessionType::Quick,
            vec![SubjectKey::Portugues],
            7,
            2,
            1,
            10,
            120,
            fixed_now(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn recording_a_session_updates_history_counters_and_activities() {
        let store = Arc::new(InMemoryStore::new());
        let service = ProgressService::load(store.clone()).await.unwrap();

        service.record_result(&quick_result()).await;

        let state = service.snapshot();
        assert_eq!(state.result_history().len(), 1);
        assert_eq!(state.stats().questions_answered, 10);
        assert_eq!(state.stats().correct_answers, 7);
        assert_eq!(state.activities().len(), 1);
        assert!(state.activities()[0].detail.contains("7/10"));

        // Persisted through to the repository as well.
        let persisted = store.load().await.unwrap().unwrap();
        assert_eq!(persisted, state);
    }

    #[tokio::test]
    async fn a_failed_save_keeps_the_in_memory_state() {
        let store = Arc::new(InMemoryStore::new());
        let service = ProgressService::load(store.clone()).await.unwrap();

        store.set_fail_writes(true);
        let streak = service.update_streak(&fixed_clock()).await;
        assert_eq!(streak, 1);
        assert_eq!(service.snapshot().stats().streak_days, 1);

        // Nothing reached the repository while writes were failing.
        store.set_fail_writes(false);
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn state_survives_a_reload_round_trip() {
        let store = Arc::new(InMemoryStore::new());
        let mut clock = fixed_clock();
        {
            let service = ProgressService::load(store.clone()).await.unwrap();
            service.set_subject_progress(SubjectKey::Matematica, 40).await;
            service.update_streak(&clock).await;
        }

        let reloaded = ProgressService::load(store).await.unwrap();
        let state = reloaded.snapshot();
        assert_eq!(state.subject_progress(SubjectKey::Matematica), 40);
        assert_eq!(state.stats().streak_days, 1);

        clock.advance(Duration::days(1));
        let _ = reloaded.update_streak(&clock).await;
        assert_eq!(reloaded.snapshot().stats().streak_days, 2);
    }
}
