//! Presentation-ready projections of session state.
//!
//! These are plain data, free of rendering concerns, so any front end
//! (terminal, web, desktop) can consume them unchanged.

use study_core::model::{PerformanceBand, SessionResult};

use crate::sessions::quiz::QuizSession;

const OPTION_LETTERS: [char; 5] = ['A', 'B', 'C', 'D', 'E'];

/// One selectable option, lettered the way answer sheets letter them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub letter: char,
    pub text: String,
    pub selected: bool,
}

/// The question currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    /// One-based, for display.
    pub number: usize,
    pub total: usize,
    pub subject: String,
    pub prompt: String,
    pub options: Vec<OptionView>,
}

impl QuestionView {
    #[must_use]
    pub fn from_session(session: &QuizSession) -> Self {
        let question = session.current_question();
        let selected = session.answer_at(session.position());
        Self {
            number: session.position() + 1,
            total: session.plan().len(),
            subject: question.subject().display_name().to_string(),
            prompt: question.prompt().to_string(),
            options: question
                .options()
                .iter()
                .enumerate()
                .map(|(i, text)| OptionView {
                    letter: OPTION_LETTERS[i],
                    text: text.clone(),
                    selected: selected == Some(i),
                })
                .collect(),
        }
    }
}

/// The question-number navigation strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavView {
    /// Per question: whether it has an answer recorded.
    pub answered: Vec<bool>,
    /// Zero-based index of the question on screen.
    pub current: usize,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

impl NavView {
    #[must_use]
    pub fn from_session(session: &QuizSession) -> Self {
        let total = session.plan().len();
        let current = session.position();
        Self {
            answered: (0..total).map(|i| session.answer_at(i).is_some()).collect(),
            current,
            can_go_back: current > 0,
            can_go_forward: current + 1 < total,
        }
    }
}

/// The results screen after a session finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub session_name: String,
    pub correct: usize,
    pub wrong: usize,
    pub unanswered: usize,
    pub total: usize,
    pub percentage: u8,
    pub band: PerformanceBand,
    /// Elapsed time formatted as `mm:ss`.
    pub elapsed: String,
    pub headline: String,
}

impl ResultView {
    #[must_use]
    pub fn from_result(result: &SessionResult) -> Self {
        let band = result.performance_band();
        Self {
            session_name: result.session_type().display_name().to_string(),
            correct: result.correct(),
            wrong: result.wrong(),
            unanswered: result.unanswered(),
            total: result.total(),
            percentage: result.percentage(),
            band,
            elapsed: format_elapsed(result.elapsed_seconds()),
            headline: headline_for(band).to_string(),
        }
    }
}

fn format_elapsed(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

fn headline_for(band: PerformanceBand) -> &'static str {
    match band {
        PerformanceBand::Excellent => "Excelente! Continue assim!",
        PerformanceBand::Good => "Bom trabalho! Quase lá!",
        PerformanceBand::NeedsWork => "Continue estudando! Você vai melhorar!",
    }
}
