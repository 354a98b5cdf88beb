#![forbid(unsafe_code)]

pub mod dashboard;
pub mod demo_catalog;
pub mod error;
pub mod progress_service;
pub mod question_bank;
pub mod remote;
pub mod sessions;
pub mod timer;
pub mod video_catalog;

pub use study_core::Clock;

pub use dashboard::{DashboardView, SubjectAverage};
pub use error::{ProgressServiceError, SessionError};
pub use progress_service::ProgressService;
pub use question_bank::QuestionBank;
pub use remote::{RemoteCatalog, RemoteError, ResultOutbox};
pub use sessions::{
    FinishPrompt, NavView, QuestionView, QuizSession, ResultView, SessionPlan, SessionPlanBuilder,
    SessionProgress, SessionWorkflow,
};
pub use timer::{FocusEvent, FocusPhase, FocusTimer, TickTimer};
pub use video_catalog::VideoCatalog;
