//! User-owned practice configuration
//!
//! Interview, presentation and communication requirements, custom question
//! sets and the personal profile, plus the store that holds them.

mod account;
mod interview;
mod practice;
mod service;
mod store;
mod validate;

pub use account::{Gender, ProfileForm, UserProfile};
pub use interview::{
    Difficulty, InterviewConfiguration, InterviewMode, InterviewRequirementsForm,
    INTERVIEW_QUESTION_COUNTS,
};
pub use practice::{
    AudienceType, CommunicationForm, CommunicationMode, CommunicationRequirements,
    CustomQuestion, CustomQuestionSet, Language, PracticeReason, PresentationForm,
    PresentationRequirements, Proficiency, QuestionSetForm,
};
pub use service::ProfileService;
pub use store::{MemoryProfileStore, ProfileStore};
