//! REST API handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use quiz_application::QuizTurnInput;
use quiz_domain::{QuizState, TurnOutcome};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::error::ApiError;
use super::state::AppState;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the server
    pub status: String,
    /// Server version
    pub version: String,
    /// Model answering quiz prompts
    pub model: String,
    /// Seconds since server started
    pub uptime_seconds: u64,
}

/// Health check endpoint
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: state.quiz.model().to_string(),
        uptime_seconds: state.uptime_seconds(),
    })
}

/// Body of `POST /api/question`
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRequest {
    pub quiz_state: QuizState,
    #[serde(default)]
    pub answer: Option<String>,
}

/// Run one quiz turn.
///
/// Responds with `{"winner": ...}` once a category reaches the threshold,
/// otherwise with the updated quiz state carrying the next question.
pub async fn question(
    State(state): State<Arc<AppState>>,
    body: Result<Json<QuestionRequest>, JsonRejection>,
) -> Result<Json<TurnOutcome>, ApiError> {
    let Json(request) = body.inspect_err(|rejection| {
        warn!(error = %rejection.body_text(), "Rejected question request body");
    })?;

    info!(
        categories = request.quiz_state.categories.len(),
        has_answer = request.answer.is_some(),
        "Question request"
    );

    let mut input = QuizTurnInput::new(request.quiz_state)
        .with_cancellation(state.shutdown.child_token());
    if let Some(answer) = request.answer {
        input = input.with_answer(answer);
    }

    match state.quiz.execute(input).await {
        Ok(outcome) => Ok(Json(outcome)),
        Err(e) => {
            let error = ApiError::from(e);
            warn!(status = error.status().as_u16(), error = %error, "Question request failed");
            Err(error)
        }
    }
}
