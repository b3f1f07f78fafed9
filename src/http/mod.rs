//! HTTP API for the practice web client
//!
//! All routes except `/health` need the `x-user-id` header.
//! - POST /interview/start_session - Start an interview session
//! - POST /interview/generate_question - Next question (stored on the session if given)
//! - POST /interview/submit_answer - Record an answer and get feedback
//! - POST /interview/end_session - Complete a session and get its summary
//! - GET /sessions, /sessions/:id, /analytics - History and aggregates
//! - GET|POST /requirements/{interview,presentation,communication,questions}
//! - GET|POST /profile - Personal profile
//! - GET|POST /practice/quick - Single question practice with feedback
//! - GET /health - Health check

mod auth;
mod handlers;
mod response;
mod routes;
mod state;

pub use auth::{AuthUser, USER_HEADER};
pub use response::{ApiError, ErrorResponse};
pub use routes::create_router;
pub use state::AppState;
