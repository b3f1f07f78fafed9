pub mod clock;
pub mod config;
pub mod error;
pub mod generator;
pub mod http;
pub mod profile;
pub mod session;
pub mod user;

pub use clock::{Clock, SystemClock};
pub use config::Config;
pub use error::{PracticeError, PracticeResult};
pub use generator::{model_from_config, QuestionGenerator, TextModel};
pub use http::{create_router, AppState};
pub use session::{InterviewSession, SessionOrchestrator, SessionQuestion, SessionStatus};
pub use user::UserId;
