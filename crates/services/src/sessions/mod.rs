//! Quiz session lifecycle: planning, the in-flight session state machine,
//! presentation views, and the workflow that ties sessions to progress
//! tracking.

pub mod plan;
pub mod quiz;
pub mod view;
pub mod workflow;

pub use plan::{SessionPlan, SessionPlanBuilder};
pub use quiz::{FinishPrompt, QuizSession, SessionProgress};
pub use view::{NavView, QuestionView, ResultView};
pub use workflow::SessionWorkflow;
