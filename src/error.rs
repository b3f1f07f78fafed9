//! Error taxonomy shared by the stores, the generator and the orchestrator.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PracticeError {
    /// The caller has not saved interview requirements yet
    #[error("Please complete interview requirements first")]
    ConfigurationMissing,

    /// A required request field is missing or malformed
    #[error("{0}")]
    InvalidInput(String),

    /// Row absent or owned by someone else
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: String },

    /// The generative model failed or is not configured
    #[error("External service error: {0}")]
    ExternalService(String),

    /// A store backend failed
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type PracticeResult<T> = std::result::Result<T, PracticeError>;

impl PracticeError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn external(message: impl Into<String>) -> Self {
        Self::ExternalService(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Message safe to hand back to a client.
    ///
    /// External and internal failures are reduced to a generic sentence; the
    /// full text only goes to the log.
    pub fn public_message(&self) -> String {
        match self {
            Self::ExternalService(_) => {
                "The AI service is temporarily unavailable. Please try again.".to_string()
            }
            Self::Internal(_) => "Something went wrong. Please try again.".to_string(),
            other => other.to_string(),
        }
    }
}
