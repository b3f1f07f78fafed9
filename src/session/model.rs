use crate::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    #[default]
    Active,
    /// Set administratively; no operation here enters it
    Paused,
    Completed,
    /// Set administratively; no operation here enters it
    Abandoned,
}

/// One interview attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewSession {
    pub id: Uuid,
    pub user: UserId,
    /// Configuration in force when the session started
    pub configuration_id: Uuid,
    pub status: SessionStatus,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    /// Snapshot of the configuration's question count at start
    pub total_questions: u32,
    pub questions_answered: u32,

    // 0-100
    pub overall_confidence_score: Option<f64>,
    pub communication_score: Option<f64>,
    pub technical_score: Option<f64>,

    pub session_feedback: Option<String>,
}

impl InterviewSession {
    /// Elapsed minutes between start and completion; 0 while not completed
    pub fn duration_minutes(&self) -> f64 {
        match self.completed_at {
            Some(completed_at) => {
                let elapsed = completed_at.signed_duration_since(self.started_at);
                elapsed.num_milliseconds() as f64 / 1000.0 / 60.0
            }
            None => 0.0,
        }
    }

    /// Answered share in percent; 0 when the session has no questions
    pub fn completion_percentage(&self) -> f64 {
        if self.total_questions == 0 {
            return 0.0;
        }
        self.questions_answered as f64 / self.total_questions as f64 * 100.0
    }
}

/// A question asked within a session, and its answer once given
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionQuestion {
    pub id: Uuid,
    pub session_id: Uuid,
    /// 1-based
    pub question_number: u32,
    pub question_text: String,
    pub user_answer: Option<String>,

    pub asked_at: DateTime<Utc>,
    pub answered_at: Option<DateTime<Utc>>,
    pub time_taken_seconds: Option<u32>,

    // 0-100
    pub relevance_score: Option<f64>,
    pub clarity_score: Option<f64>,
    pub completeness_score: Option<f64>,

    pub ai_feedback: Option<String>,
    /// e.g. "communication", "technical_depth"
    pub improvement_areas: Vec<String>,
}

impl SessionQuestion {
    /// Mean of the sub-scores that are set, 0 if none are
    pub fn overall_score(&self) -> f64 {
        let scores: Vec<f64> = [
            self.relevance_score,
            self.clarity_score,
            self.completeness_score,
        ]
        .into_iter()
        .flatten()
        .collect();

        if scores.is_empty() {
            0.0
        } else {
            scores.iter().sum::<f64>() / scores.len() as f64
        }
    }

    pub fn is_answered(&self) -> bool {
        self.user_answer.is_some()
    }
}

/// Session-level scores written at completion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionScores {
    pub confidence: f64,
    pub communication: f64,
    pub technical: f64,
}

/// Post-session behavioural metrics (one per session)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionAnalytics {
    pub session_id: Uuid,

    /// Seconds
    pub average_response_time: f64,
    pub longest_response_time: f64,
    pub shortest_response_time: f64,

    pub hesitation_count: u32,
    pub word_count_total: u32,
    pub avg_words_per_answer: f64,

    pub key_strengths: Vec<String>,
    pub improvement_areas: Vec<String>,
    pub recommended_topics: Vec<String>,
    pub difficulty_recommendation: Option<String>,

    pub created_at: Option<DateTime<Utc>>,
}
