//! Presentation, communication and custom-question practice setups.
//!
//! Unlike the interview configuration, every submission here creates a new row.

use super::interview::{DEFAULT_TIME_PER_QUESTION, MAX_TIME_PER_QUESTION};
use super::validate::{one_of, optional, required, within};
use crate::error::{PracticeError, PracticeResult};
use crate::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const PRESENTATION_QUESTION_COUNTS: [u32; 4] = [5, 10, 15, 20];
pub const COMMUNICATION_ROUND_COUNTS: [u32; 3] = [3, 4, 5];
pub const QUESTION_SET_COUNTS: [u32; 5] = [1, 5, 10, 15, 20];

// ============================================================================
// Presentation
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudienceType {
    Employees,
    Students,
    Teachers,
    #[default]
    General,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationRequirements {
    pub id: Uuid,
    pub user: UserId,
    pub topic_name: String,
    pub description: Option<String>,
    pub audience_type: AudienceType,
    pub time_per_question: u32,
    pub num_questions: u32,
    pub custom_keywords: Option<String>,
    /// Reference to an uploaded slide deck
    pub slides_ref: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PresentationForm {
    pub topic_name: Option<String>,
    pub description: Option<String>,
    pub audience_type: Option<AudienceType>,
    pub time_per_question: Option<u32>,
    pub num_questions: Option<u32>,
    pub custom_keywords: Option<String>,
    pub slides_ref: Option<String>,
}

impl PresentationRequirements {
    pub fn create(user: UserId, form: PresentationForm, now: DateTime<Utc>) -> PracticeResult<Self> {
        Ok(Self {
            id: Uuid::new_v4(),
            user,
            topic_name: required("topic_name", form.topic_name)?,
            description: optional(form.description),
            audience_type: form.audience_type.unwrap_or_default(),
            time_per_question: within(
                "time_per_question",
                form.time_per_question.unwrap_or(DEFAULT_TIME_PER_QUESTION),
                1,
                MAX_TIME_PER_QUESTION,
            )?,
            num_questions: one_of(
                "num_questions",
                form.num_questions.unwrap_or(5),
                &PRESENTATION_QUESTION_COUNTS,
            )?,
            custom_keywords: optional(form.custom_keywords),
            slides_ref: optional(form.slides_ref),
            created_at: now,
        })
    }
}

// ============================================================================
// Communication
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Spanish,
    French,
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    #[default]
    Basic,
    Intermediate,
    Pro,
}

/// Roleplay level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommunicationMode {
    /// Self introduction, simple conversation
    #[default]
    BasicIntro,
    /// Group discussions, peer conversations
    Intermediate,
    /// Professional scenario roleplay
    Pro,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PracticeReason {
    Office,
    Travel,
    Students,
    Presentation,
    #[default]
    Personal,
    /// User supplies `custom_reason`
    Custom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunicationRequirements {
    pub id: Uuid,
    pub user: UserId,
    pub full_name: String,
    pub age: Option<u32>,
    pub email: Option<String>,
    pub language: Language,
    pub language_proficiency: Proficiency,
    pub mode: CommunicationMode,
    pub reason: PracticeReason,
    pub custom_reason: Option<String>,
    pub time_per_round: u32,
    pub num_rounds: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommunicationForm {
    pub full_name: Option<String>,
    pub age: Option<u32>,
    pub email: Option<String>,
    pub language: Option<Language>,
    pub language_proficiency: Option<Proficiency>,
    pub mode: Option<CommunicationMode>,
    pub reason: Option<PracticeReason>,
    pub custom_reason: Option<String>,
    pub time_per_round: Option<u32>,
    pub num_rounds: Option<u32>,
}

impl CommunicationRequirements {
    pub fn create(
        user: UserId,
        form: CommunicationForm,
        now: DateTime<Utc>,
    ) -> PracticeResult<Self> {
        let reason = form.reason.unwrap_or_default();
        let custom_reason = optional(form.custom_reason);
        if reason == PracticeReason::Custom && custom_reason.is_none() {
            return Err(PracticeError::invalid_input(
                "Please provide your custom reason",
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            user,
            full_name: required("full_name", form.full_name)?,
            age: form.age,
            email: optional(form.email),
            language: form.language.unwrap_or_default(),
            language_proficiency: form.language_proficiency.unwrap_or_default(),
            mode: form.mode.unwrap_or_default(),
            reason,
            custom_reason,
            time_per_round: within(
                "time_per_round",
                form.time_per_round.unwrap_or(DEFAULT_TIME_PER_QUESTION),
                60,
                MAX_TIME_PER_QUESTION,
            )?,
            num_rounds: one_of(
                "num_rounds",
                form.num_rounds.unwrap_or(3),
                &COMMUNICATION_ROUND_COUNTS,
            )?,
            created_at: now,
        })
    }
}

// ============================================================================
// Custom question sets
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomQuestion {
    pub id: Uuid,
    pub question_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomQuestionSet {
    pub id: Uuid,
    pub user: UserId,
    pub topic_name: String,
    pub short_description: Option<String>,
    pub num_questions: u32,
    pub time_per_question: u32,
    pub questions: Vec<CustomQuestion>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionSetForm {
    pub topic_name: Option<String>,
    pub short_description: Option<String>,
    pub num_questions: Option<u32>,
    pub time_per_question: Option<u32>,
    #[serde(default)]
    pub questions: Vec<String>,
}

impl CustomQuestionSet {
    pub fn create(user: UserId, form: QuestionSetForm, now: DateTime<Utc>) -> PracticeResult<Self> {
        let questions = form
            .questions
            .into_iter()
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty())
            .map(|question_text| CustomQuestion {
                id: Uuid::new_v4(),
                question_text,
            })
            .collect();

        Ok(Self {
            id: Uuid::new_v4(),
            user,
            topic_name: required("topic_name", form.topic_name)?,
            short_description: optional(form.short_description),
            num_questions: one_of(
                "num_questions",
                form.num_questions.unwrap_or(5),
                &QUESTION_SET_COUNTS,
            )?,
            time_per_question: within(
                "time_per_question",
                form.time_per_question.unwrap_or(DEFAULT_TIME_PER_QUESTION),
                1,
                MAX_TIME_PER_QUESTION,
            )?,
            questions,
            created_at: now,
        })
    }
}
