use serde::Deserialize;
use serde_json::{Map, Value};
use uuid::Uuid;

fn first_question() -> u32 {
    1
}

/// Ask for the next question
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateQuestionRequest {
    #[serde(default = "first_question")]
    pub question_number: u32,

    /// Free-form hints (position, skills, difficulty, mode, ...)
    #[serde(default)]
    pub context: Map<String, Value>,

    #[serde(default)]
    pub previous_answers: Vec<String>,

    /// When set, the question is stored on this session
    #[serde(default)]
    pub session_id: Option<Uuid>,
}

/// Answer to a previously generated question
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAnswerRequest {
    #[serde(default)]
    pub answer: String,

    #[serde(default = "first_question")]
    pub question_number: u32,

    #[serde(default)]
    pub session_id: Option<Uuid>,

    /// Seconds the candidate took
    #[serde(default)]
    pub time_taken: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EndSessionRequest {
    #[serde(default)]
    pub session_id: Option<Uuid>,
}
