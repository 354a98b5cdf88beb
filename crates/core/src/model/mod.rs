mod progress;
mod question;
mod session;
mod subject;
mod video;

pub use progress::{
    ActivityEntry, ActivityKind, AggregateStats, ProgressState, StatKey, ThemePreference,
    ACTIVITY_LOG_CAP, RESULT_HISTORY_CAP,
};
pub use question::{Question, QuestionError, QuestionId};
pub use session::{
    percentage_of, PerformanceBand, SessionId, SessionResult, SessionResultError, SessionType,
};
pub use subject::{SubjectKey, UnknownSubject};
pub use video::{Video, VideoId};
