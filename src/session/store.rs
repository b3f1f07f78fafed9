use super::model::{
    InterviewSession, SessionAnalytics, SessionQuestion, SessionScores, SessionStatus,
};
use crate::error::{PracticeError, PracticeResult};
use crate::profile::InterviewConfiguration;
use crate::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Run-time state of interview attempts
///
/// Each method is a single row read or write; nothing spans several writes.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// New active session snapshotting the configuration's question count
    async fn create(
        &self,
        user: &UserId,
        configuration: &InterviewConfiguration,
        started_at: DateTime<Utc>,
    ) -> PracticeResult<InterviewSession>;

    /// Session by id, only if owned by `user`
    async fn get(&self, id: Uuid, user: &UserId) -> PracticeResult<InterviewSession>;

    /// The user's sessions, newest first
    async fn list(&self, user: &UserId) -> PracticeResult<Vec<InterviewSession>>;

    async fn add_question(
        &self,
        session_id: Uuid,
        number: u32,
        text: &str,
        asked_at: DateTime<Utc>,
    ) -> PracticeResult<SessionQuestion>;

    /// Question by number; the latest one if the number was asked more than once
    async fn question(&self, session_id: Uuid, number: u32) -> PracticeResult<SessionQuestion>;

    /// All questions of a session in asking order
    async fn questions(&self, session_id: Uuid) -> PracticeResult<Vec<SessionQuestion>>;

    async fn record_answer(
        &self,
        question_id: Uuid,
        answer: &str,
        time_taken_seconds: Option<u32>,
        answered_at: DateTime<Utc>,
    ) -> PracticeResult<()>;

    async fn set_feedback(&self, question_id: Uuid, feedback: &str) -> PracticeResult<()>;

    /// Bump `questions_answered`, returning the updated session
    async fn increment_answered(&self, session_id: Uuid) -> PracticeResult<InterviewSession>;

    /// Mark completed; scores are only written when given
    async fn complete(
        &self,
        session_id: Uuid,
        completed_at: DateTime<Utc>,
        scores: Option<SessionScores>,
        feedback: Option<String>,
    ) -> PracticeResult<InterviewSession>;

    async fn analytics(&self, session_id: Uuid) -> PracticeResult<Option<SessionAnalytics>>;

    async fn save_analytics(&self, analytics: SessionAnalytics) -> PracticeResult<()>;
}

/// In-process session store
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<Uuid, InterviewSession>>,
    questions: RwLock<Vec<SessionQuestion>>,
    analytics: RwLock<HashMap<Uuid, SessionAnalytics>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn create(
        &self,
        user: &UserId,
        configuration: &InterviewConfiguration,
        started_at: DateTime<Utc>,
    ) -> PracticeResult<InterviewSession> {
        let session = InterviewSession {
            id: Uuid::new_v4(),
            user: user.clone(),
            configuration_id: configuration.id,
            status: SessionStatus::Active,
            started_at,
            completed_at: None,
            total_questions: configuration.num_questions,
            questions_answered: 0,
            overall_confidence_score: None,
            communication_score: None,
            technical_score: None,
            session_feedback: None,
        };

        self.sessions
            .write()
            .await
            .insert(session.id, session.clone());
        Ok(session)
    }

    async fn get(&self, id: Uuid, user: &UserId) -> PracticeResult<InterviewSession> {
        self.sessions
            .read()
            .await
            .get(&id)
            .filter(|s| &s.user == user)
            .cloned()
            .ok_or_else(|| PracticeError::not_found("Session", id))
    }

    async fn list(&self, user: &UserId) -> PracticeResult<Vec<InterviewSession>> {
        let mut sessions: Vec<InterviewSession> = self
            .sessions
            .read()
            .await
            .values()
            .filter(|s| &s.user == user)
            .cloned()
            .collect();
        sessions.sort_by(|a, b| b.started_at.cmp(&a.started_at));
        Ok(sessions)
    }

    async fn add_question(
        &self,
        session_id: Uuid,
        number: u32,
        text: &str,
        asked_at: DateTime<Utc>,
    ) -> PracticeResult<SessionQuestion> {
        let question = SessionQuestion {
            id: Uuid::new_v4(),
            session_id,
            question_number: number,
            question_text: text.to_string(),
            user_answer: None,
            asked_at,
            answered_at: None,
            time_taken_seconds: None,
            relevance_score: None,
            clarity_score: None,
            completeness_score: None,
            ai_feedback: None,
            improvement_areas: Vec::new(),
        };

        self.questions.write().await.push(question.clone());
        Ok(question)
    }

    async fn question(&self, session_id: Uuid, number: u32) -> PracticeResult<SessionQuestion> {
        self.questions
            .read()
            .await
            .iter()
            .rev()
            .find(|q| q.session_id == session_id && q.question_number == number)
            .cloned()
            .ok_or_else(|| {
                PracticeError::not_found("Question", format!("{}#{}", session_id, number))
            })
    }

    async fn questions(&self, session_id: Uuid) -> PracticeResult<Vec<SessionQuestion>> {
        Ok(self
            .questions
            .read()
            .await
            .iter()
            .filter(|q| q.session_id == session_id)
            .cloned()
            .collect())
    }

    async fn record_answer(
        &self,
        question_id: Uuid,
        answer: &str,
        time_taken_seconds: Option<u32>,
        answered_at: DateTime<Utc>,
    ) -> PracticeResult<()> {
        let mut questions = self.questions.write().await;
        let question = questions
            .iter_mut()
            .find(|q| q.id == question_id)
            .ok_or_else(|| PracticeError::not_found("Question", question_id))?;

        question.user_answer = Some(answer.to_string());
        question.answered_at = Some(answered_at);
        question.time_taken_seconds = time_taken_seconds;
        Ok(())
    }

    async fn set_feedback(&self, question_id: Uuid, feedback: &str) -> PracticeResult<()> {
        let mut questions = self.questions.write().await;
        let question = questions
            .iter_mut()
            .find(|q| q.id == question_id)
            .ok_or_else(|| PracticeError::not_found("Question", question_id))?;

        question.ai_feedback = Some(feedback.to_string());
        Ok(())
    }

    async fn increment_answered(&self, session_id: Uuid) -> PracticeResult<InterviewSession> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&session_id)
            .ok_or_else(|| PracticeError::not_found("Session", session_id))?;

        session.questions_answered += 1;
        Ok(session.clone())
    }

    async fn complete(
        &self,
        session_id: Uuid,
        completed_at: DateTime<Utc>,
        scores: Option<SessionScores>,
        feedback: Option<String>,
    ) -> PracticeResult<InterviewSession> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&session_id)
            .ok_or_else(|| PracticeError::not_found("Session", session_id))?;

        session.status = SessionStatus::Completed;
        session.completed_at = Some(completed_at);
        if let Some(scores) = scores {
            session.overall_confidence_score = Some(scores.confidence);
            session.communication_score = Some(scores.communication);
            session.technical_score = Some(scores.technical);
        }
        if feedback.is_some() {
            session.session_feedback = feedback;
        }
        Ok(session.clone())
    }

    async fn analytics(&self, session_id: Uuid) -> PracticeResult<Option<SessionAnalytics>> {
        Ok(self.analytics.read().await.get(&session_id).cloned())
    }

    async fn save_analytics(&self, analytics: SessionAnalytics) -> PracticeResult<()> {
        self.analytics
            .write()
            .await
            .insert(analytics.session_id, analytics);
        Ok(())
    }
}
