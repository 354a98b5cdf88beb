//! Read-only dashboard projection of the progress state.

use std::collections::BTreeMap;

use study_core::model::{ActivityEntry, ProgressState, SessionResult, SubjectKey, percentage_of};

/// How many history entries the home screen shows.
const RECENT_RESULTS: usize = 5;

/// Average session score for one subject, over the retained history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectAverage {
    pub subject: SubjectKey,
    pub average_percentage: u8,
    pub sessions: usize,
}

/// Everything the home screen shows, computed in one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub questions_answered: u64,
    pub correct_answers: u64,
    /// Overall hit rate across all recorded answers, 0..=100.
    pub accuracy: u8,
    pub streak_days: u32,
    pub lessons_viewed: u64,
    pub focus_sessions: u64,
    pub sessions_taken: usize,
    pub subject_averages: Vec<SubjectAverage>,
    pub recent_results: Vec<SessionResult>,
    pub recent_activities: Vec<ActivityEntry>,
}

impl DashboardView {
    #[must_use]
    pub fn from_state(state: &ProgressState) -> Self {
        let stats = state.stats();

        let mut per_subject: BTreeMap<SubjectKey, (u64, usize)> = BTreeMap::new();
        for result in state.result_history() {
            for &subject in result.subjects() {
                let (sum, count) = per_subject.entry(subject).or_default();
                *sum += u64::from(result.percentage());
                *count += 1;
            }
        }

        let subject_averages = per_subject
            .into_iter()
            .map(|(subject, (sum, count))| SubjectAverage {
                subject,
                // Same rounding rule as every other percentage here.
                #[allow(
                    clippy::cast_precision_loss,
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss
                )]
                average_percentage: (sum as f64 / count as f64).round() as u8,
                sessions: count,
            })
            .collect();

        #[allow(clippy::cast_possible_truncation)]
        let accuracy = percentage_of(
            stats.correct_answers as usize,
            stats.questions_answered as usize,
        );

        Self {
            questions_answered: stats.questions_answered,
            correct_answers: stats.correct_answers,
            accuracy,
            streak_days: stats.streak_days,
            lessons_viewed: stats.lessons_viewed,
            focus_sessions: stats.focus_sessions,
            sessions_taken: state.result_history().len(),
            subject_averages,
            recent_results: state
                .result_history()
                .iter()
                .take(RECENT_RESULTS)
                .cloned()
                .collect(),
            recent_activities: state.activities().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use study_core::model::{SessionId, SessionResult, SessionType, StatKey};
    use study_core::time::fixed_now;

    fn result(subjects: Vec<SubjectKey>, correct: usize) -> SessionResult {
        SessionResult::from_counts(
            SessionId::generate(),
            SessionType::Quick,
            subjects,
            correct,
            10 - correct,
            0,
            10,
            60,
            fixed_now(),
        )
        .unwrap()
    }

    #[test]
    fn an_empty_state_renders_a_zeroed_dashboard() {
        let view = DashboardView::from_state(&ProgressState::default());
        assert_eq!(view.accuracy, 0);
        assert_eq!(view.sessions_taken, 0);
        assert!(view.subject_averages.is_empty());
    }

    #[test]
    fn accuracy_covers_all_recorded_answers() {
        let mut state = ProgressState::default();
        state.increment_stat(StatKey::QuestionsAnswered, 30);
        state.increment_stat(StatKey::CorrectAnswers, 20);

        let view = DashboardView::from_state(&state);
        assert_eq!(view.accuracy, 67);
    }

    #[test]
    fn subject_averages_aggregate_the_result_history() {
        let mut state = ProgressState::default();
        state.record_result(result(vec![SubjectKey::Portugues], 6));
        state.record_result(result(vec![SubjectKey::Portugues], 8));
        state.record_result(result(
            vec![SubjectKey::Portugues, SubjectKey::Matematica],
            9,
        ));

        let view = DashboardView::from_state(&state);
        assert_eq!(view.sessions_taken, 3);
        assert_eq!(view.recent_results.len(), 3);
        assert_eq!(view.subject_averages.len(), 2);

        let pt = view
            .subject_averages
            .iter()
            .find(|a| a.subject == SubjectKey::Portugues)
            .unwrap();
        assert_eq!(pt.sessions, 3);
        // (60 + 80 + 90) / 3 = 76.67, rounded up (not truncated to 76).
        assert_eq!(pt.average_percentage, 77);

        let mt = view
            .subject_averages
            .iter()
            .find(|a| a.subject == SubjectKey::Matematica)
            .unwrap();
        assert_eq!(mt.sessions, 1);
        assert_eq!(mt.average_percentage, 90);
    }
}
