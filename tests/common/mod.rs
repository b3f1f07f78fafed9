// Shared fixtures for integration tests: a settable clock, a scripted text
// model and a fully wired orchestrator over in-memory stores.
#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use practice_coach::clock::Clock;
use practice_coach::generator::{QuestionGenerator, TextModel};
use practice_coach::profile::{
    InterviewConfiguration, InterviewMode, InterviewRequirementsForm, MemoryProfileStore,
    ProfileService, ProfileStore,
};
use practice_coach::session::{MemorySessionStore, SessionOrchestrator, SessionStore};
use practice_coach::UserId;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Clock that only moves when told to
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Utc.with_ymd_and_hms(2025, 3, 14, 9, 0, 0).unwrap()),
        }
    }

    pub fn advance_secs(&self, secs: i64) {
        let mut now = self.now.lock().unwrap();
        *now = *now + Duration::seconds(secs);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Text model returning queued replies; fails once the queue is empty
#[derive(Default)]
pub struct ScriptedModel {
    replies: Mutex<VecDeque<String>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedModel {
    pub fn with_replies(replies: &[&str]) -> Self {
        Self {
            replies: Mutex::new(replies.iter().map(|r| r.to_string()).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextModel for ScriptedModel {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.replies.lock().unwrap().pop_front() {
            Some(reply) => Ok(reply),
            None => anyhow::bail!("quota exceeded"),
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

pub struct Harness {
    pub profile_store: Arc<MemoryProfileStore>,
    pub session_store: Arc<MemorySessionStore>,
    pub clock: Arc<ManualClock>,
    pub orchestrator: SessionOrchestrator,
    pub profiles: ProfileService,
}

impl Harness {
    pub fn new(generator: QuestionGenerator) -> Self {
        let profile_store = Arc::new(MemoryProfileStore::new());
        let session_store = Arc::new(MemorySessionStore::new());
        let clock = Arc::new(ManualClock::new());

        let orchestrator = SessionOrchestrator::new(
            profile_store.clone() as Arc<dyn ProfileStore>,
            session_store.clone() as Arc<dyn SessionStore>,
            generator.clone(),
            clock.clone() as Arc<dyn Clock>,
        );
        let profiles = ProfileService::new(
            profile_store.clone() as Arc<dyn ProfileStore>,
            generator,
            clock.clone() as Arc<dyn Clock>,
        );

        Self {
            profile_store,
            session_store,
            clock,
            orchestrator,
            profiles,
        }
    }

    pub fn unavailable() -> Self {
        Self::new(QuestionGenerator::unavailable())
    }

    pub fn scripted(model: Arc<ScriptedModel>) -> Self {
        Self::new(QuestionGenerator::new(model as Arc<dyn TextModel>))
    }
}

pub fn user() -> UserId {
    UserId::new("asha")
}

pub fn interview_form() -> InterviewRequirementsForm {
    InterviewRequirementsForm {
        full_name: Some("Asha Rao".to_string()),
        email: Some("asha@example.com".to_string()),
        education: Some("B.Tech Computer Science".to_string()),
        skills: Some("Rust, SQL".to_string()),
        role: Some("Backend Engineer".to_string()),
        mode: Some(InterviewMode::Technical),
        num_questions: Some(5),
        ..Default::default()
    }
}

pub fn configuration() -> InterviewConfiguration {
    InterviewConfiguration::create(user(), interview_form(), ManualClock::new().now())
        .expect("valid interview form")
}
