//! HTTP error responses

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use quiz_application::{GatewayError, QuizTurnError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of every non-2xx response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Errors a quiz request can end in
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body was not a valid request or described an unusable quiz state
    #[error("{0}")]
    BadRequest(String),

    /// The model could not produce a usable turn
    #[error("{0}")]
    Internal(String),

    /// The turn, or the model call behind it, ran out of time
    #[error("{0}")]
    Timeout(String),

    /// The server is shutting down
    #[error("{0}")]
    Unavailable(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QuizTurnError> for ApiError {
    fn from(error: QuizTurnError) -> Self {
        let message = error.to_string();
        match error {
            QuizTurnError::InvalidState(_) => ApiError::BadRequest(message),
            QuizTurnError::Timeout(_) | QuizTurnError::Gateway(GatewayError::Timeout) => {
                ApiError::Timeout(message)
            }
            QuizTurnError::Cancelled => ApiError::Unavailable(message),
            QuizTurnError::Gateway(_)
            | QuizTurnError::Response(_)
            | QuizTurnError::Validation(_) => ApiError::Internal(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_domain::{ResponseError, StateError, ValidationError};
    use std::time::Duration;

    #[test]
    fn test_turn_error_status_mapping() {
        let cases = [
            (
                QuizTurnError::InvalidState(StateError::NoCategories),
                StatusCode::BAD_REQUEST,
            ),
            (
                QuizTurnError::Gateway(GatewayError::EmptyResponse),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                QuizTurnError::Response(ResponseError::Empty),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                QuizTurnError::Validation(ValidationError::ProbabilityOutOfRange {
                    category: "A".to_string(),
                    value: 1.5,
                }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                QuizTurnError::Timeout(Duration::from_secs(5)),
                StatusCode::GATEWAY_TIMEOUT,
            ),
            (
                QuizTurnError::Gateway(GatewayError::Timeout),
                StatusCode::GATEWAY_TIMEOUT,
            ),
            (QuizTurnError::Cancelled, StatusCode::SERVICE_UNAVAILABLE),
        ];

        for (error, expected) in cases {
            assert_eq!(ApiError::from(error).status(), expected);
        }
    }

    #[test]
    fn test_message_is_kept() {
        let err = ApiError::from(QuizTurnError::Gateway(GatewayError::EmptyResponse));
        assert_eq!(err.to_string(), "Gateway error: No response from model");
    }
}
