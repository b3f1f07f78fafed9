use super::auth::AuthUser;
use super::response::ApiError;
use super::state::AppState;
use crate::error::PracticeError;
use crate::generator::quick_practice_question;
use crate::profile::{
    CommunicationForm, CommunicationRequirements, CustomQuestionSet, InterviewConfiguration,
    InterviewRequirementsForm, PresentationForm, PresentationRequirements, ProfileForm,
    QuestionSetForm, UserProfile,
};
use crate::session::{
    EndSessionRequest, GenerateQuestionRequest, PracticeOverview, SessionDetail, SessionListing,
    SessionProgress, SessionSummary, SubmitAnswerRequest,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

type ApiResult<T> = Result<Json<T>, ApiError>;

/// A newly created row, answered with 201
type CreatedResult<T> = Result<(StatusCode, Json<RecordResponse<T>>), ApiError>;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct StartSessionResponse {
    pub success: bool,
    pub session_id: Uuid,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateQuestionResponse {
    pub success: bool,
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitAnswerResponse {
    pub success: bool,
    pub feedback: String,
    pub session_progress: SessionProgress,
}

#[derive(Debug, Serialize)]
pub struct EndSessionResponse {
    pub success: bool,
    pub message: String,
    pub session_summary: SessionSummary,
}

#[derive(Debug, Serialize)]
pub struct ConfigurationResponse {
    pub success: bool,
    pub configuration: Option<InterviewConfiguration>,
}

/// A single saved or fetched row
#[derive(Debug, Serialize)]
pub struct RecordResponse<T> {
    pub success: bool,
    pub record: T,
}

#[derive(Debug, Serialize)]
pub struct RecordsResponse<T> {
    pub success: bool,
    pub records: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct QuickFeedbackRequest {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct QuickQuestionResponse {
    pub success: bool,
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct QuickFeedbackResponse {
    pub success: bool,
    pub question: String,
    pub user_answer: String,
    pub feedback: String,
}

fn record<T>(record: T) -> Json<RecordResponse<T>> {
    Json(RecordResponse {
        success: true,
        record,
    })
}

fn records<T>(records: Vec<T>) -> Json<RecordsResponse<T>> {
    Json(RecordsResponse {
        success: true,
        records,
    })
}

// ============================================================================
// Interview session
// ============================================================================

/// POST /interview/start_session
/// Start a new interview session from the caller's requirements
pub async fn start_session(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> ApiResult<StartSessionResponse> {
    let session = state.orchestrator.start(&user).await?;

    Ok(Json(StartSessionResponse {
        success: true,
        session_id: session.id,
        message: "Interview session started successfully".to_string(),
    }))
}

/// POST /interview/generate_question
pub async fn generate_question(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    payload: Result<Json<GenerateQuestionRequest>, JsonRejection>,
) -> ApiResult<GenerateQuestionResponse> {
    let Json(req) = payload?;
    let question = state.orchestrator.generate_question(&user, req).await?;

    Ok(Json(GenerateQuestionResponse {
        success: true,
        question,
    }))
}

/// POST /interview/submit_answer (also served at /interview/evaluate_answer)
pub async fn submit_answer(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    payload: Result<Json<SubmitAnswerRequest>, JsonRejection>,
) -> ApiResult<SubmitAnswerResponse> {
    let Json(req) = payload?;
    let outcome = state.orchestrator.submit_answer(&user, req).await?;

    Ok(Json(SubmitAnswerResponse {
        success: true,
        feedback: outcome.feedback,
        session_progress: outcome.progress,
    }))
}

/// POST /interview/end_session
pub async fn end_session(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    payload: Result<Json<EndSessionRequest>, JsonRejection>,
) -> ApiResult<EndSessionResponse> {
    let Json(req) = payload?;
    let summary = state.orchestrator.end_session(&user, req).await?;

    Ok(Json(EndSessionResponse {
        success: true,
        message: "Session completed successfully".to_string(),
        session_summary: summary,
    }))
}

/// GET /sessions
pub async fn list_sessions(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> ApiResult<RecordsResponse<SessionListing>> {
    Ok(records(state.orchestrator.sessions(&user).await?))
}

/// GET /sessions/:session_id
pub async fn get_session(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(session_id): Path<String>,
) -> ApiResult<RecordResponse<SessionDetail>> {
    let session_id = Uuid::parse_str(&session_id)
        .map_err(|_| PracticeError::not_found("Session", &session_id))?;

    Ok(record(
        state.orchestrator.session_detail(&user, session_id).await?,
    ))
}

/// GET /analytics
pub async fn analytics(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> ApiResult<RecordResponse<PracticeOverview>> {
    Ok(record(state.orchestrator.overview(&user).await?))
}

// ============================================================================
// Requirements and profile
// ============================================================================

/// GET /requirements/interview
pub async fn get_interview_requirements(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> ApiResult<ConfigurationResponse> {
    let configuration = state.profiles.interview_configuration(&user).await?;

    Ok(Json(ConfigurationResponse {
        success: true,
        configuration,
    }))
}

/// POST /requirements/interview
/// Create or overwrite the caller's interview requirements
pub async fn save_interview_requirements(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    payload: Result<Json<InterviewRequirementsForm>, JsonRejection>,
) -> ApiResult<ConfigurationResponse> {
    let Json(form) = payload?;
    let configuration = state.profiles.save_interview_requirements(&user, form).await?;

    Ok(Json(ConfigurationResponse {
        success: true,
        configuration: Some(configuration),
    }))
}

/// GET /requirements/presentation
pub async fn list_presentations(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> ApiResult<RecordsResponse<PresentationRequirements>> {
    Ok(records(state.profiles.presentations(&user).await?))
}

/// POST /requirements/presentation
pub async fn create_presentation(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    payload: Result<Json<PresentationForm>, JsonRejection>,
) -> CreatedResult<PresentationRequirements> {
    let Json(form) = payload?;
    let row = state.profiles.create_presentation(&user, form).await?;
    Ok((StatusCode::CREATED, record(row)))
}

/// GET /requirements/communication
pub async fn list_communications(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> ApiResult<RecordsResponse<CommunicationRequirements>> {
    Ok(records(state.profiles.communications(&user).await?))
}

/// POST /requirements/communication
pub async fn create_communication(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    payload: Result<Json<CommunicationForm>, JsonRejection>,
) -> CreatedResult<CommunicationRequirements> {
    let Json(form) = payload?;
    let row = state.profiles.create_communication(&user, form).await?;
    Ok((StatusCode::CREATED, record(row)))
}

/// GET /requirements/questions
pub async fn list_question_sets(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> ApiResult<RecordsResponse<CustomQuestionSet>> {
    Ok(records(state.profiles.question_sets(&user).await?))
}

/// POST /requirements/questions
pub async fn create_question_set(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    payload: Result<Json<QuestionSetForm>, JsonRejection>,
) -> CreatedResult<CustomQuestionSet> {
    let Json(form) = payload?;
    let row = state.profiles.create_question_set(&user, form).await?;
    Ok((StatusCode::CREATED, record(row)))
}

/// GET /profile
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> ApiResult<RecordResponse<UserProfile>> {
    Ok(record(state.profiles.user_profile(&user).await?))
}

/// POST /profile
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    payload: Result<Json<ProfileForm>, JsonRejection>,
) -> ApiResult<RecordResponse<UserProfile>> {
    let Json(form) = payload?;
    Ok(record(state.profiles.update_user_profile(&user, form).await?))
}

// ============================================================================
// Quick practice
// ============================================================================

/// GET /practice/quick
/// One random question for single-answer practice
pub async fn quick_question(AuthUser(_user): AuthUser) -> Json<QuickQuestionResponse> {
    Json(QuickQuestionResponse {
        success: true,
        question: quick_practice_question().to_string(),
    })
}

/// POST /practice/quick
pub async fn quick_feedback(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    payload: Result<Json<QuickFeedbackRequest>, JsonRejection>,
) -> ApiResult<QuickFeedbackResponse> {
    let Json(req) = payload?;
    let answer = req.answer.trim().to_string();
    if answer.is_empty() || req.question.trim().is_empty() {
        return Err(PracticeError::invalid_input("Question and answer are required").into());
    }

    info!("Quick practice feedback requested by {}", user);
    let feedback = state.generator.quick_feedback(&req.question, &answer).await;

    Ok(Json(QuickFeedbackResponse {
        success: true,
        question: req.question,
        user_answer: answer,
        feedback,
    }))
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
