use super::account::{ProfileForm, UserProfile};
use super::interview::{InterviewConfiguration, InterviewRequirementsForm};
use super::practice::{
    CommunicationForm, CommunicationRequirements, CustomQuestionSet, PresentationForm,
    PresentationRequirements, QuestionSetForm,
};
use super::store::ProfileStore;
use crate::clock::Clock;
use crate::error::PracticeResult;
use crate::generator::QuestionGenerator;
use crate::user::UserId;
use std::sync::Arc;
use tracing::{info, warn};

const RESUME_ANALYSIS_PREFIX: &str = "AI Resume Analysis:\n";

/// Requirement submissions and profile edits
pub struct ProfileService {
    store: Arc<dyn ProfileStore>,
    generator: QuestionGenerator,
    clock: Arc<dyn Clock>,
}

impl ProfileService {
    pub fn new(
        store: Arc<dyn ProfileStore>,
        generator: QuestionGenerator,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            generator,
            clock,
        }
    }

    pub async fn interview_configuration(
        &self,
        user: &UserId,
    ) -> PracticeResult<Option<InterviewConfiguration>> {
        self.store.interview_configuration(user).await
    }

    /// Create the caller's interview configuration, or overwrite the existing one
    pub async fn save_interview_requirements(
        &self,
        user: &UserId,
        mut form: InterviewRequirementsForm,
    ) -> PracticeResult<InterviewConfiguration> {
        let resume_text = form
            .resume_text
            .take()
            .filter(|t| !t.trim().is_empty());

        let mut cfg = match self.store.interview_configuration(user).await? {
            Some(existing) => existing.update(form)?,
            None => InterviewConfiguration::create(user.clone(), form, self.clock.now())?,
        };

        if let Some(text) = resume_text {
            match self.generator.analyze_resume(&text, &cfg).await {
                Ok(summary) if cfg.about_you.is_none() => {
                    cfg.about_you = Some(format!("{}{}", RESUME_ANALYSIS_PREFIX, summary));
                }
                Ok(_) => {}
                Err(e) => warn!("Résumé analysis skipped for {}: {}", user, e),
            }
        }

        self.store.save_interview_configuration(cfg.clone()).await?;
        info!("Saved interview requirements for {}", user);

        Ok(cfg)
    }

    pub async fn create_presentation(
        &self,
        user: &UserId,
        form: PresentationForm,
    ) -> PracticeResult<PresentationRequirements> {
        let req = PresentationRequirements::create(user.clone(), form, self.clock.now())?;
        self.store.create_presentation(req.clone()).await?;
        info!("Saved presentation requirements '{}' for {}", req.topic_name, user);
        Ok(req)
    }

    pub async fn presentations(&self, user: &UserId) -> PracticeResult<Vec<PresentationRequirements>> {
        self.store.presentations(user).await
    }

    pub async fn create_communication(
        &self,
        user: &UserId,
        form: CommunicationForm,
    ) -> PracticeResult<CommunicationRequirements> {
        let req = CommunicationRequirements::create(user.clone(), form, self.clock.now())?;
        self.store.create_communication(req.clone()).await?;
        info!("Saved communication requirements for {}", user);
        Ok(req)
    }

    pub async fn communications(
        &self,
        user: &UserId,
    ) -> PracticeResult<Vec<CommunicationRequirements>> {
        self.store.communications(user).await
    }

    pub async fn create_question_set(
        &self,
        user: &UserId,
        form: QuestionSetForm,
    ) -> PracticeResult<CustomQuestionSet> {
        let set = CustomQuestionSet::create(user.clone(), form, self.clock.now())?;
        self.store.create_question_set(set.clone()).await?;
        info!(
            "Saved question set '{}' ({} questions) for {}",
            set.topic_name,
            set.questions.len(),
            user
        );
        Ok(set)
    }

    pub async fn question_sets(&self, user: &UserId) -> PracticeResult<Vec<CustomQuestionSet>> {
        self.store.question_sets(user).await
    }

    /// Stored profile, or an empty one that is not persisted
    pub async fn user_profile(&self, user: &UserId) -> PracticeResult<UserProfile> {
        Ok(self
            .store
            .user_profile(user)
            .await?
            .unwrap_or_else(|| UserProfile::empty(user.clone())))
    }

    pub async fn update_user_profile(
        &self,
        user: &UserId,
        form: ProfileForm,
    ) -> PracticeResult<UserProfile> {
        let profile = self.user_profile(user).await?.apply(form)?;
        self.store.save_user_profile(profile.clone()).await?;
        Ok(profile)
    }
}
