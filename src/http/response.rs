use crate::error::PracticeError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use tracing::{error, warn};

/// Body of every failed request
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

/// A failure ready to be sent to the client
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn unauthenticated() -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: "Authentication required".to_string(),
        }
    }
}

impl From<PracticeError> for ApiError {
    fn from(err: PracticeError) -> Self {
        let status = match &err {
            PracticeError::ConfigurationMissing | PracticeError::InvalidInput(_) => {
                StatusCode::BAD_REQUEST
            }
            PracticeError::NotFound { .. } => StatusCode::NOT_FOUND,
            PracticeError::ExternalService(_) => StatusCode::BAD_GATEWAY,
            PracticeError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!("Request failed: {}", err);
        } else {
            warn!("Request rejected: {}", err);
        }

        Self {
            status,
            message: err.public_message(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        PracticeError::invalid_input(rejection.body_text()).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                success: false,
                error: self.message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_follows_error_kind() {
        let cases = [
            (PracticeError::ConfigurationMissing, StatusCode::BAD_REQUEST),
            (
                PracticeError::invalid_input("Session ID is required"),
                StatusCode::BAD_REQUEST,
            ),
            (
                PracticeError::not_found("Session", "abc"),
                StatusCode::NOT_FOUND,
            ),
            (PracticeError::external("quota"), StatusCode::BAD_GATEWAY),
            (
                PracticeError::Internal("lock poisoned".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status, status);
        }
    }

    #[test]
    fn test_store_failure_is_redacted() {
        let api = ApiError::from(PracticeError::Internal(
            "connection refused at 10.0.0.7:5432".to_string(),
        ));

        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!api.message.contains("10.0.0.7"));
    }
}
