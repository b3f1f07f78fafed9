use super::model::{InterviewSession, SessionAnalytics, SessionQuestion};
use serde::{Deserialize, Serialize};

/// Answered vs. total questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionProgress {
    pub answered: u32,
    pub total: u32,
}

/// Result of submitting an answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub feedback: String,
    pub progress: SessionProgress,
}

/// Returned when a session ends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub total_questions: u32,
    pub questions_answered: u32,
    /// Rounded to one decimal
    pub duration_minutes: f64,
    pub overall_score: Option<f64>,
}

impl SessionSummary {
    pub fn of(session: &InterviewSession) -> Self {
        Self {
            total_questions: session.total_questions,
            questions_answered: session.questions_answered,
            duration_minutes: round1(session.duration_minutes()),
            overall_score: session.overall_confidence_score,
        }
    }
}

/// A session as listed to its owner
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionListing {
    #[serde(flatten)]
    pub session: InterviewSession,
    pub completion_percentage: f64,
    pub duration_minutes: f64,
}

impl From<InterviewSession> for SessionListing {
    fn from(session: InterviewSession) -> Self {
        Self {
            completion_percentage: session.completion_percentage(),
            duration_minutes: session.duration_minutes(),
            session,
        }
    }
}

/// Aggregate practice figures for the analytics page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PracticeOverview {
    pub total_sessions: usize,
    /// Five most recent
    pub recent_sessions: Vec<SessionListing>,
    pub average_score: f64,
    pub best_score: f64,
    pub total_practice_hours: f64,
}

impl PracticeOverview {
    /// Build from a user's sessions, newest first
    pub fn from_sessions(sessions: Vec<InterviewSession>) -> Self {
        let scores: Vec<f64> = sessions
            .iter()
            .filter_map(|s| s.overall_confidence_score)
            .collect();

        let average_score = if scores.is_empty() {
            0.0
        } else {
            scores.iter().sum::<f64>() / scores.len() as f64
        };
        let best_score = scores.iter().copied().fold(0.0, f64::max);
        let total_minutes: f64 = sessions.iter().map(|s| s.duration_minutes()).sum();

        Self {
            total_sessions: sessions.len(),
            average_score: round1(average_score),
            best_score: round1(best_score),
            total_practice_hours: round1(total_minutes / 60.0),
            recent_sessions: sessions.into_iter().take(5).map(SessionListing::from).collect(),
        }
    }
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// A stored question with its derived score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionListing {
    #[serde(flatten)]
    pub question: SessionQuestion,
    pub overall_score: f64,
}

impl From<SessionQuestion> for QuestionListing {
    fn from(question: SessionQuestion) -> Self {
        Self {
            overall_score: question.overall_score(),
            question,
        }
    }
}

/// One session with everything recorded for it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionDetail {
    pub session: SessionListing,
    pub questions: Vec<QuestionListing>,
    pub analytics: Option<SessionAnalytics>,
}
