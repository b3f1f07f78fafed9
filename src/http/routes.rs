use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Interview session lifecycle
        .route("/interview/start_session", post(handlers::start_session))
        .route(
            "/interview/generate_question",
            post(handlers::generate_question),
        )
        .route("/interview/submit_answer", post(handlers::submit_answer))
        // Older clients post answers here
        .route("/interview/evaluate_answer", post(handlers::submit_answer))
        .route("/interview/end_session", post(handlers::end_session))
        // Session history
        .route("/sessions", get(handlers::list_sessions))
        .route("/sessions/:session_id", get(handlers::get_session))
        .route("/analytics", get(handlers::analytics))
        // Requirements
        .route(
            "/requirements/interview",
            get(handlers::get_interview_requirements).post(handlers::save_interview_requirements),
        )
        .route(
            "/requirements/presentation",
            get(handlers::list_presentations).post(handlers::create_presentation),
        )
        .route(
            "/requirements/communication",
            get(handlers::list_communications).post(handlers::create_communication),
        )
        .route(
            "/requirements/questions",
            get(handlers::list_question_sets).post(handlers::create_question_set),
        )
        // Profile
        .route(
            "/profile",
            get(handlers::get_profile).post(handlers::update_profile),
        )
        // Quick practice
        .route(
            "/practice/quick",
            get(handlers::quick_question).post(handlers::quick_feedback),
        )
        .layer(CorsLayer::permissive())
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
