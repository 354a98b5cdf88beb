use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::{SessionResult, SubjectKey};
use crate::time::Clock;

/// Most-recent-first activity log cap.
pub const ACTIVITY_LOG_CAP: usize = 20;
/// Most-recent-first session result history cap.
pub const RESULT_HISTORY_CAP: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

/// Counters addressed by [`ProgressState::increment_stat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKey {
    LessonsViewed,
    QuestionsAnswered,
    CorrectAnswers,
    FocusSessions,
}

/// Aggregate, cross-session study counters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AggregateStats {
    pub lessons_viewed: u64,
    pub questions_answered: u64,
    pub correct_answers: u64,
    pub streak_days: u32,
    pub last_access: Option<DateTime<Utc>>,
    pub focus_sessions: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Session,
    Lesson,
    Focus,
}

/// One entry of the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    pub title: String,
    pub detail: String,
    pub timestamp: DateTime<Utc>,
}

/// Durable per-profile study state: theme, per-subject progress, aggregate
/// counters, and the bounded activity and result histories.
///
/// The whole structure is persisted as a single record; every mutating
/// method leaves it in a state ready to be written out.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProgressState {
    theme: ThemePreference,
    subject_progress: BTreeMap<SubjectKey, u8>,
    stats: AggregateStats,
    activities: Vec<ActivityEntry>,
    result_history: Vec<SessionResult>,
}

impl ProgressState {
    #[must_use]
    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    pub fn set_theme(&mut self, theme: ThemePreference) {
        self.theme = theme;
    }

    /// Per-subject progress, 0..=100. Unset subjects read as 0.
    #[must_use]
    pub fn subject_progress(&self, subject: SubjectKey) -> u8 {
        self.subject_progress.get(&subject).copied().unwrap_or(0)
    }

    /// Set a subject's progress, clamped into 0..=100.
    pub fn set_subject_progress(&mut self, subject: SubjectKey, percent: u8) {
        self.subject_progress.insert(subject, percent.min(100));
    }

    #[must_use]
    pub fn stats(&self) -> &AggregateStats {
        &self.stats
    }

    /// Most-recent-first activity feed.
    #[must_use]
    pub fn activities(&self) -> &[ActivityEntry] {
        &self.activities
    }

    /// Most-recent-first session result history.
    #[must_use]
    pub fn result_history(&self) -> &[SessionResult] {
        &self.result_history
    }

    /// Add `amount` to one aggregate counter and return the new value.
    pub fn increment_stat(&mut self, key: StatKey, amount: u64) -> u64 {
        let counter = match key {
            StatKey::LessonsViewed => &mut self.stats.lessons_viewed,
            StatKey::QuestionsAnswered => &mut self.stats.questions_answered,
            StatKey::CorrectAnswers => &mut self.stats.correct_answers,
            StatKey::FocusSessions => &mut self.stats.focus_sessions,
        };
        *counter = counter.saturating_add(amount);
        *counter
    }

    /// Prepend an activity entry, evicting the oldest past the cap.
    pub fn add_activity(&mut self, entry: ActivityEntry) {
        self.activities.insert(0, entry);
        self.activities.truncate(ACTIVITY_LOG_CAP);
    }

    /// Prepend a finished session result, evicting the oldest past the cap.
    pub fn record_result(&mut self, result: SessionResult) {
        self.result_history.insert(0, result);
        self.result_history.truncate(RESULT_HISTORY_CAP);
    }

    /// Update the consecutive-day streak against the clock and return it.
    ///
    /// Same calendar day as the last access: unchanged. Exactly one day
    /// later: incremented. Any larger gap, or no prior access: reset to 1.
    /// The last-access timestamp is always refreshed, which makes the call
    /// idempotent within a calendar day.
    pub fn update_streak(&mut self, clock: &Clock) -> u32 {
        let today = clock.today();
        self.stats.streak_days = match self.last_access_date() {
            Some(last) if last == today => self.stats.streak_days,
            Some(last) if last.succ_opt() == Some(today) => {
                self.stats.streak_days.saturating_add(1)
            }
            _ => 1,
        };
        self.stats.last_access = Some(clock.now());
        self.stats.streak_days
    }

    fn last_access_date(&self) -> Option<NaiveDate> {
        self.stats.last_access.map(|t| t.date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SessionId, SessionType};
    use crate::time::{fixed_clock, fixed_now};
    use chrono::Duration;

    fn quick_result(percentage_correct: usize) -> SessionResult {
        SessionResult::from_counts(
            SessionId::generate(),
            SessionType::Quick,
            vec![SubjectKey::Portugues],
            percentage_correct,
            10 - percentage_correct,
            0,
            10,
            60,
            fixed_now(),
        )
        .unwrap()
    }

    fn activity(title: &str) -> ActivityEntry {
        ActivityEntry {
            kind: ActivityKind::Session,
            title: title.to_string(),
            detail: String::new(),
            timestamp: fixed_now(),
        }
    }

    #[test]
    fn first_access_starts_the_streak_at_one() {
        let mut state = ProgressState::default();
        assert_eq!(state.update_streak(&fixed_clock()), 1);
        assert_eq!(state.stats().last_access, Some(fixed_now()));
    }

    #[test]
    fn streak_is_idempotent_within_a_day() {
        let mut state = ProgressState::default();
        let mut clock = fixed_clock();
        state.update_streak(&clock);
        clock.advance(Duration::hours(1));
        assert_eq!(state.update_streak(&clock), 1);
        assert_eq!(state.update_streak(&clock), 1);
    }

    #[test]
    fn consecutive_day_increments_the_streak() {
        let mut state = ProgressState::default();
        let mut clock = fixed_clock();
        state.update_streak(&clock);
        clock.advance(Duration::days(1));
        assert_eq!(state.update_streak(&clock), 2);
        clock.advance(Duration::days(1));
        assert_eq!(state.update_streak(&clock), 3);
    }

    #[test]
    fn a_gap_resets_the_streak() {
        let mut state = ProgressState::default();
        let mut clock = fixed_clock();
        state.update_streak(&clock);
        clock.advance(Duration::days(1));
        state.update_streak(&clock);
        clock.advance(Duration::days(3));
        assert_eq!(state.update_streak(&clock), 1);
    }

    #[test]
    fn subject_progress_is_clamped() {
        let mut state = ProgressState::default();
        state.set_subject_progress(SubjectKey::Matematica, 250);
        assert_eq!(state.subject_progress(SubjectKey::Matematica), 100);
        assert_eq!(state.subject_progress(SubjectKey::Logica), 0);
    }

    #[test]
    fn activity_log_keeps_the_most_recent_entries() {
        let mut state = ProgressState::default();
        for i in 0..(ACTIVITY_LOG_CAP + 5) {
            state.add_activity(activity(&format!("entry {i}")));
        }
        assert_eq!(state.activities().len(), ACTIVITY_LOG_CAP);
        assert_eq!(state.activities()[0].title, format!("entry {}", ACTIVITY_LOG_CAP + 4));
    }

    #[test]
    fn result_history_evicts_past_the_cap() {
        let mut state = ProgressState::default();
        for _ in 0..(RESULT_HISTORY_CAP + 3) {
            state.record_result(quick_result(7));
        }
        assert_eq!(state.result_history().len(), RESULT_HISTORY_CAP);
    }

    #[test]
    fn increment_stat_addresses_each_counter() {
        let mut state = ProgressState::default();
        assert_eq!(state.increment_stat(StatKey::QuestionsAnswered, 10), 10);
        assert_eq!(state.increment_stat(StatKey::CorrectAnswers, 7), 7);
        assert_eq!(state.increment_stat(StatKey::LessonsViewed, 1), 1);
        assert_eq!(state.increment_stat(StatKey::FocusSessions, 1), 1);
        assert_eq!(state.stats().questions_answered, 10);
    }
}
