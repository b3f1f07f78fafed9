//! Interview session management
//!
//! This module provides the `SessionOrchestrator`, which runs one interview
//! attempt through its lifecycle:
//! - start: snapshot the configuration into a new active session
//! - generate question / submit answer rounds, with model feedback
//! - end: mark completed, stamp the time and summarise

mod model;
mod orchestrator;
mod requests;
mod stats;
mod store;

pub use model::{
    InterviewSession, SessionAnalytics, SessionQuestion, SessionScores, SessionStatus,
};
pub use orchestrator::{SessionOrchestrator, PLACEHOLDER_SCORES};
pub use requests::{EndSessionRequest, GenerateQuestionRequest, SubmitAnswerRequest};
pub use stats::{
    AnswerOutcome, PracticeOverview, QuestionListing, SessionDetail, SessionListing,
    SessionProgress, SessionSummary,
};
pub use store::{MemorySessionStore, SessionStore};
