use super::validate::{one_of, optional, required, within};
use crate::error::PracticeResult;
use crate::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Allowed values for `num_questions`
pub const INTERVIEW_QUESTION_COUNTS: [u32; 3] = [5, 10, 20];

pub const DEFAULT_TIME_PER_QUESTION: u32 = 60;
pub const MAX_TIME_PER_QUESTION: u32 = 180;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Interview style; also selects the fallback question list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewMode {
    Hr,
    #[default]
    Technical,
    /// Group discussion
    Gd,
}

impl InterviewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewMode::Hr => "hr",
            InterviewMode::Technical => "technical",
            InterviewMode::Gd => "gd",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hr" => Some(InterviewMode::Hr),
            "technical" => Some(InterviewMode::Technical),
            "gd" => Some(InterviewMode::Gd),
            _ => None,
        }
    }
}

/// A user's saved interview setup. At most one per user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewConfiguration {
    pub id: Uuid,
    pub user: UserId,

    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,

    pub education: String,
    pub branch: Option<String>,
    /// Comma separated
    pub skills: String,
    pub experience: Option<String>,
    pub about_you: Option<String>,

    pub role: Option<String>,
    pub domain: Option<String>,
    pub difficulty: Difficulty,
    pub mode: Option<InterviewMode>,

    /// Seconds
    pub time_per_question: u32,
    pub num_questions: u32,
    pub custom_keywords: Option<String>,

    /// Reference to an uploaded résumé held by the file store
    pub resume_ref: Option<String>,

    pub created_at: DateTime<Utc>,
}

/// Interview requirements as submitted by the client
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InterviewRequirementsForm {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub education: Option<String>,
    pub branch: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<String>,
    pub about_you: Option<String>,
    pub role: Option<String>,
    pub domain: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub mode: Option<InterviewMode>,
    pub time_per_question: Option<u32>,
    pub num_questions: Option<u32>,
    pub custom_keywords: Option<String>,
    pub resume_ref: Option<String>,

    /// Plain text extracted from the résumé, used for the AI summary
    pub resume_text: Option<String>,
}

impl InterviewConfiguration {
    /// Build a fresh configuration row from a submitted form
    pub fn create(
        user: UserId,
        form: InterviewRequirementsForm,
        now: DateTime<Utc>,
    ) -> PracticeResult<Self> {
        Self::from_form(Uuid::new_v4(), user, now, None, form)
    }

    /// Overwrite this row with a newly submitted form, keeping identity and creation time
    pub fn update(&self, form: InterviewRequirementsForm) -> PracticeResult<Self> {
        Self::from_form(
            self.id,
            self.user.clone(),
            self.created_at,
            self.resume_ref.clone(),
            form,
        )
    }

    fn from_form(
        id: Uuid,
        user: UserId,
        created_at: DateTime<Utc>,
        previous_resume: Option<String>,
        form: InterviewRequirementsForm,
    ) -> PracticeResult<Self> {
        let time_per_question = within(
            "time_per_question",
            form.time_per_question.unwrap_or(DEFAULT_TIME_PER_QUESTION),
            1,
            MAX_TIME_PER_QUESTION,
        )?;
        let num_questions = one_of(
            "num_questions",
            form.num_questions.unwrap_or(INTERVIEW_QUESTION_COUNTS[0]),
            &INTERVIEW_QUESTION_COUNTS,
        )?;

        Ok(Self {
            id,
            user,
            full_name: required("full_name", form.full_name)?,
            email: required("email", form.email)?,
            phone: optional(form.phone),
            education: required("education", form.education)?,
            branch: optional(form.branch),
            skills: required("skills", form.skills)?,
            experience: optional(form.experience),
            about_you: optional(form.about_you),
            role: optional(form.role),
            domain: optional(form.domain),
            difficulty: form.difficulty.unwrap_or_default(),
            mode: form.mode,
            time_per_question,
            num_questions,
            custom_keywords: optional(form.custom_keywords),
            resume_ref: optional(form.resume_ref).or(previous_resume),
            created_at,
        })
    }
}
