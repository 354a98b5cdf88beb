use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

use crate::model::SubjectKey;

/// Unique identifier for one quiz session run.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generates a fresh random session identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId({})", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Session length presets and their fixed question targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    Quick,
    Medium,
    Full,
}

impl SessionType {
    /// Number of questions a session of this type draws.
    #[must_use]
    pub fn target_count(self) -> usize {
        match self {
            SessionType::Quick => 10,
            SessionType::Medium => 30,
            SessionType::Full => 60,
        }
    }

    /// Suggested time limit, for display only.
    #[must_use]
    pub fn time_limit_minutes(self) -> u32 {
        match self {
            SessionType::Quick => 15,
            SessionType::Medium => 60,
            SessionType::Full => 120,
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            SessionType::Quick => "Simulado Rápido",
            SessionType::Medium => "Simulado Médio",
            SessionType::Full => "Simulado Completo",
        }
    }
}

/// Coarse performance grading used by the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceBand {
    Excellent,
    Good,
    NeedsWork,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionResultError {
    #[error("answer counts ({sum}) do not add up to the question total ({total})")]
    CountMismatch { total: usize, sum: usize },
}

/// Immutable summary of a finished quiz session.
///
/// Unanswered questions count toward the total but neither correct nor
/// wrong; the percentage is rounded over the full total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResult {
    session_id: SessionId,
    session_type: SessionType,
    subjects: Vec<SubjectKey>,
    correct: usize,
    wrong: usize,
    unanswered: usize,
    total: usize,
    percentage: u8,
    elapsed_seconds: u64,
    completed_at: DateTime<Utc>,
}

impl SessionResult {
    /// Build a result from per-session counts.
    ///
    /// # Errors
    ///
    /// Returns `SessionResultError::CountMismatch` if
    /// `correct + wrong + unanswered != total`.
    #[allow(clippy::too_many_arguments)]
    pub fn from_counts(
        session_id: SessionId,
        session_type: SessionType,
        subjects: Vec<SubjectKey>,
        correct: usize,
        wrong: usize,
        unanswered: usize,
        total: usize,
        elapsed_seconds: u64,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, SessionResultError> {
        let sum = correct + wrong + unanswered;
        if sum != total {
            return Err(SessionResultError::CountMismatch { total, sum });
        }

        Ok(Self {
            session_id,
            session_type,
            subjects,
            correct,
            wrong,
            unanswered,
            total,
            percentage: percentage_of(correct, total),
            elapsed_seconds,
            completed_at,
        })
    }

    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    #[must_use]
    pub fn session_type(&self) -> SessionType {
        self.session_type
    }

    #[must_use]
    pub fn subjects(&self) -> &[SubjectKey] {
        &self.subjects
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn wrong(&self) -> usize {
        self.wrong
    }

    #[must_use]
    pub fn unanswered(&self) -> usize {
        self.unanswered
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Rounded hit rate over all questions, 0..=100.
    #[must_use]
    pub fn percentage(&self) -> u8 {
        self.percentage
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn performance_band(&self) -> PerformanceBand {
        match self.percentage {
            80..=100 => PerformanceBand::Excellent,
            60..=79 => PerformanceBand::Good,
            _ => PerformanceBand::NeedsWork,
        }
    }
}

/// Rounded percentage of `part` over `total`, with an empty-total guard.
#[must_use]
pub fn percentage_of(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        ((part as f64 / total as f64) * 100.0).round() as u8
    }
}
