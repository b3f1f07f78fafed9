use super::model::{InterviewSession, SessionQuestion, SessionScores};
use super::requests::{EndSessionRequest, GenerateQuestionRequest, SubmitAnswerRequest};
use super::stats::{
    AnswerOutcome, PracticeOverview, SessionDetail, SessionListing, SessionProgress,
    SessionSummary,
};
use super::store::SessionStore;
use crate::clock::Clock;
use crate::error::{PracticeError, PracticeResult};
use crate::generator::{InterviewContext, QuestionGenerator};
use crate::profile::ProfileStore;
use crate::user::UserId;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Scores written when a session with at least one question ends.
///
/// These are fixed values, not derived from the per-question sub-scores.
// TODO: replace with the mean of the per-question sub-scores once evaluation produces them
pub const PLACEHOLDER_SCORES: SessionScores = SessionScores {
    confidence: 75.0,
    communication: 80.0,
    technical: 70.0,
};

/// Drives one interview attempt: start, question/answer rounds, end
pub struct SessionOrchestrator {
    profiles: Arc<dyn ProfileStore>,
    sessions: Arc<dyn SessionStore>,
    generator: QuestionGenerator,
    clock: Arc<dyn Clock>,
}

impl SessionOrchestrator {
    pub fn new(
        profiles: Arc<dyn ProfileStore>,
        sessions: Arc<dyn SessionStore>,
        generator: QuestionGenerator,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            profiles,
            sessions,
            generator,
            clock,
        }
    }

    /// Open a new active session from the caller's interview configuration
    pub async fn start(&self, user: &UserId) -> PracticeResult<InterviewSession> {
        let configuration = self
            .profiles
            .interview_configuration(user)
            .await?
            .ok_or(PracticeError::ConfigurationMissing)?;

        let session = self
            .sessions
            .create(user, &configuration, self.clock.now())
            .await?;

        info!(
            "Started session {} for {} ({} questions)",
            session.id, user, session.total_questions
        );

        Ok(session)
    }

    /// Produce question `question_number`, storing it on the session when one is given
    pub async fn generate_question(
        &self,
        user: &UserId,
        req: GenerateQuestionRequest,
    ) -> PracticeResult<String> {
        if req.question_number == 0 {
            return Err(PracticeError::invalid_input(
                "question_number must be 1 or greater",
            ));
        }

        let mut ctx = InterviewContext::from_client(&req.context);
        if let Some(configuration) = self.profiles.interview_configuration(user).await? {
            ctx = ctx.with_configuration(&configuration);
        }

        let question = self
            .generator
            .generate_question(req.question_number, &ctx, &req.previous_answers)
            .await;

        if let Some(session_id) = req.session_id {
            match self.sessions.get(session_id, user).await {
                Ok(session) => {
                    let now = self.clock.now();
                    self.sessions
                        .add_question(session.id, req.question_number, &question, now)
                        .await?;
                    debug!(
                        "Stored question {} on session {}",
                        req.question_number, session.id
                    );
                }
                Err(e) if e.is_not_found() => {
                    warn!(
                        "Session {} not found for {}; question {} not stored",
                        session_id, user, req.question_number
                    );
                }
                Err(e) => return Err(e),
            }
        }

        Ok(question)
    }

    /// Record an answer, count it, and attach model feedback
    pub async fn submit_answer(
        &self,
        user: &UserId,
        req: SubmitAnswerRequest,
    ) -> PracticeResult<AnswerOutcome> {
        let session_id = match req.session_id {
            Some(id) if !req.answer.is_empty() => id,
            _ => {
                return Err(PracticeError::invalid_input(
                    "Answer and session ID are required",
                ))
            }
        };

        let lookup = self
            .lookup_question(user, session_id, req.question_number)
            .await;
        let (session, question) = match lookup {
            Ok(found) => found,
            Err(e) if e.is_not_found() => {
                return Err(PracticeError::not_found(
                    "Session or question",
                    format!("{}#{}", session_id, req.question_number),
                ))
            }
            Err(e) => return Err(e),
        };

        if question.is_answered() {
            warn!(
                "Question {} of session {} answered again; counting it a second time",
                question.question_number, session.id
            );
        }

        // Two separate writes; no transaction spans them
        self.sessions
            .record_answer(question.id, &req.answer, req.time_taken, self.clock.now())
            .await?;
        let session = self.sessions.increment_answered(session.id).await?;

        let ctx = match self.profiles.interview_configuration(user).await? {
            Some(configuration) => InterviewContext::for_evaluation(&configuration),
            None => InterviewContext::default(),
        };

        let feedback = self
            .generator
            .evaluate_answer(&req.answer, req.question_number, &ctx, &question.question_text)
            .await;
        self.sessions.set_feedback(question.id, &feedback).await?;

        info!(
            "Session {}: answered {}/{}",
            session.id, session.questions_answered, session.total_questions
        );

        Ok(AnswerOutcome {
            feedback,
            progress: SessionProgress {
                answered: session.questions_answered,
                total: session.total_questions,
            },
        })
    }

    /// Mark the session completed and summarise it
    pub async fn end_session(
        &self,
        user: &UserId,
        req: EndSessionRequest,
    ) -> PracticeResult<SessionSummary> {
        let session_id = req
            .session_id
            .ok_or_else(|| PracticeError::invalid_input("Session ID is required"))?;

        let session = self.sessions.get(session_id, user).await?;
        let asked = self.sessions.questions(session.id).await?;
        let scores = (!asked.is_empty()).then_some(PLACEHOLDER_SCORES);

        let session = self
            .sessions
            .complete(session.id, self.clock.now(), scores, None)
            .await?;

        info!(
            "Completed session {} for {}: {}/{} answered in {:.1} min",
            session.id,
            user,
            session.questions_answered,
            session.total_questions,
            session.duration_minutes()
        );

        Ok(SessionSummary::of(&session))
    }

    /// The caller's sessions, newest first
    pub async fn sessions(&self, user: &UserId) -> PracticeResult<Vec<SessionListing>> {
        Ok(self
            .sessions
            .list(user)
            .await?
            .into_iter()
            .map(SessionListing::from)
            .collect())
    }

    pub async fn session_detail(
        &self,
        user: &UserId,
        session_id: Uuid,
    ) -> PracticeResult<SessionDetail> {
        let session = self.sessions.get(session_id, user).await?;
        let questions = self.sessions.questions(session.id).await?;
        let analytics = self.sessions.analytics(session.id).await?;

        Ok(SessionDetail {
            session: session.into(),
            questions: questions.into_iter().map(Into::into).collect(),
            analytics,
        })
    }

    pub async fn overview(&self, user: &UserId) -> PracticeResult<PracticeOverview> {
        Ok(PracticeOverview::from_sessions(self.sessions.list(user).await?))
    }

    async fn lookup_question(
        &self,
        user: &UserId,
        session_id: Uuid,
        number: u32,
    ) -> PracticeResult<(InterviewSession, SessionQuestion)> {
        let session = self.sessions.get(session_id, user).await?;
        let question = self.sessions.question(session.id, number).await?;
        Ok((session, question))
    }
}
