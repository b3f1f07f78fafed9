use super::account::UserProfile;
use super::interview::InterviewConfiguration;
use super::practice::{CommunicationRequirements, CustomQuestionSet, PresentationRequirements};
use crate::error::PracticeResult;
use crate::user::UserId;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Storage for user-owned practice configuration
///
/// Lookups return `None` rather than creating rows; callers decide whether to create.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn interview_configuration(
        &self,
        user: &UserId,
    ) -> PracticeResult<Option<InterviewConfiguration>>;

    /// Insert or replace the caller's single interview configuration
    async fn save_interview_configuration(&self, cfg: InterviewConfiguration)
        -> PracticeResult<()>;

    async fn create_presentation(&self, req: PresentationRequirements) -> PracticeResult<()>;

    async fn presentations(&self, user: &UserId) -> PracticeResult<Vec<PresentationRequirements>>;

    async fn create_communication(&self, req: CommunicationRequirements) -> PracticeResult<()>;

    async fn communications(&self, user: &UserId)
        -> PracticeResult<Vec<CommunicationRequirements>>;

    async fn create_question_set(&self, set: CustomQuestionSet) -> PracticeResult<()>;

    async fn question_sets(&self, user: &UserId) -> PracticeResult<Vec<CustomQuestionSet>>;

    async fn user_profile(&self, user: &UserId) -> PracticeResult<Option<UserProfile>>;

    async fn save_user_profile(&self, profile: UserProfile) -> PracticeResult<()>;
}

/// In-process profile store
#[derive(Default)]
pub struct MemoryProfileStore {
    interviews: RwLock<HashMap<UserId, InterviewConfiguration>>,
    presentations: RwLock<Vec<PresentationRequirements>>,
    communications: RwLock<Vec<CommunicationRequirements>>,
    question_sets: RwLock<Vec<CustomQuestionSet>>,
    profiles: RwLock<HashMap<UserId, UserProfile>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn interview_configuration(
        &self,
        user: &UserId,
    ) -> PracticeResult<Option<InterviewConfiguration>> {
        Ok(self.interviews.read().await.get(user).cloned())
    }

    async fn save_interview_configuration(
        &self,
        cfg: InterviewConfiguration,
    ) -> PracticeResult<()> {
        self.interviews.write().await.insert(cfg.user.clone(), cfg);
        Ok(())
    }

    async fn create_presentation(&self, req: PresentationRequirements) -> PracticeResult<()> {
        self.presentations.write().await.push(req);
        Ok(())
    }

    async fn presentations(&self, user: &UserId) -> PracticeResult<Vec<PresentationRequirements>> {
        let rows = self.presentations.read().await;
        Ok(rows.iter().filter(|r| &r.user == user).cloned().collect())
    }

    async fn create_communication(&self, req: CommunicationRequirements) -> PracticeResult<()> {
        self.communications.write().await.push(req);
        Ok(())
    }

    async fn communications(
        &self,
        user: &UserId,
    ) -> PracticeResult<Vec<CommunicationRequirements>> {
        let rows = self.communications.read().await;
        Ok(rows.iter().filter(|r| &r.user == user).cloned().collect())
    }

    async fn create_question_set(&self, set: CustomQuestionSet) -> PracticeResult<()> {
        self.question_sets.write().await.push(set);
        Ok(())
    }

    async fn question_sets(&self, user: &UserId) -> PracticeResult<Vec<CustomQuestionSet>> {
        let rows = self.question_sets.read().await;
        Ok(rows.iter().filter(|r| &r.user == user).cloned().collect())
    }

    async fn user_profile(&self, user: &UserId) -> PracticeResult<Option<UserProfile>> {
        Ok(self.profiles.read().await.get(user).cloned())
    }

    async fn save_user_profile(&self, profile: UserProfile) -> PracticeResult<()> {
        self.profiles
            .write()
            .await
            .insert(profile.user.clone(), profile);
        Ok(())
    }
}
