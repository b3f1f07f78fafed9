use crate::clock::{Clock, SystemClock};
use crate::generator::QuestionGenerator;
use crate::profile::{MemoryProfileStore, ProfileService, ProfileStore};
use crate::session::{MemorySessionStore, SessionOrchestrator, SessionStore};
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Interview session lifecycle
    pub orchestrator: Arc<SessionOrchestrator>,

    /// Requirement forms and the user profile
    pub profiles: Arc<ProfileService>,

    /// Direct access for quick practice feedback
    pub generator: QuestionGenerator,
}

impl AppState {
    pub fn new(
        profile_store: Arc<dyn ProfileStore>,
        session_store: Arc<dyn SessionStore>,
        generator: QuestionGenerator,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            orchestrator: Arc::new(SessionOrchestrator::new(
                Arc::clone(&profile_store),
                session_store,
                generator.clone(),
                Arc::clone(&clock),
            )),
            profiles: Arc::new(ProfileService::new(
                profile_store,
                generator.clone(),
                clock,
            )),
            generator,
        }
    }

    /// In-memory stores and the wall clock
    pub fn in_memory(generator: QuestionGenerator) -> Self {
        Self::new(
            Arc::new(MemoryProfileStore::new()),
            Arc::new(MemorySessionStore::new()),
            generator,
            Arc::new(SystemClock),
        )
    }
}
