//! Run Quiz Turn use case
//!
//! Drives one request/response cycle of the quiz:
//!
//! 1. **Update**: when the state names the last question's category and the
//!    request carries an answer, ask the model for revised probabilities and
//!    apply them to the ledger (all or nothing).
//! 2. **Next question**: always ask the model for the next question.
//! 3. **Resolve**: if a category reached the threshold, return the verdict
//!    and drop the fresh question; otherwise return the updated state.
//!
//! The use case holds no quiz state of its own. Any failure aborts the turn
//! and the client can resubmit the same state.

use crate::config::BehaviorConfig;
use crate::ports::conversation_logger::{ConversationLogger, NoConversationLogger};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::use_cases::shared::{check_cancelled, complete_with_retry};
use quiz_domain::{
    Category, QuizPhase, QuizPromptTemplate, QuizState, ResponseError, StateError, TurnOutcome,
    ValidationError, Verdict, apply_update, find_winner, leading_category,
    parse_probability_update, parse_question_text, renormalize,
};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that can occur during a quiz turn
#[derive(Error, Debug)]
pub enum QuizTurnError {
    #[error("Invalid quiz state: {0}")]
    InvalidState(#[from] StateError),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("{0}")]
    Response(#[from] ResponseError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Turn timed out after {0:?}")]
    Timeout(Duration),

    #[error("Operation cancelled")]
    Cancelled,
}

impl QuizTurnError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, QuizTurnError::Cancelled)
    }

    /// Errors caused by what the client sent rather than by the model
    pub fn is_client_error(&self) -> bool {
        matches!(self, QuizTurnError::InvalidState(_))
    }
}

/// Input for the RunQuizTurn use case
#[derive(Debug, Clone)]
pub struct QuizTurnInput {
    /// Client-held quiz state
    pub state: QuizState,
    /// The user's answer to `state.current_question`, if any
    pub answer: Option<String>,
    /// Cancels the turn between or during model calls
    pub cancellation_token: Option<CancellationToken>,
}

impl QuizTurnInput {
    pub fn new(state: QuizState) -> Self {
        Self {
            state,
            answer: None,
            cancellation_token: None,
        }
    }

    pub fn with_answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = Some(answer.into());
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }
}

/// Use case for running one quiz turn
pub struct RunQuizTurnUseCase {
    gateway: Arc<dyn LlmGateway>,
    behavior: BehaviorConfig,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl Clone for RunQuizTurnUseCase {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            behavior: self.behavior.clone(),
            conversation_logger: self.conversation_logger.clone(),
        }
    }
}

impl RunQuizTurnUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self {
            gateway,
            behavior: BehaviorConfig::default(),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn behavior(&self) -> &BehaviorConfig {
        &self.behavior
    }

    /// Model answering this use case's prompts
    pub fn model(&self) -> &str {
        self.gateway.model()
    }

    /// Execute one turn, bounded by the configured timeout if any.
    pub async fn execute(&self, input: QuizTurnInput) -> Result<TurnOutcome, QuizTurnError> {
        match self.behavior.timeout {
            Some(limit) => tokio::time::timeout(limit, self.run_turn(input))
                .await
                .map_err(|_| {
                    warn!(timeout_ms = limit.as_millis() as u64, "Quiz turn timed out");
                    QuizTurnError::Timeout(limit)
                })?,
            None => self.run_turn(input).await,
        }
    }

    async fn run_turn(&self, input: QuizTurnInput) -> Result<TurnOutcome, QuizTurnError> {
        let QuizTurnInput {
            mut state,
            answer,
            cancellation_token,
        } = input;

        state.validate()?;

        let entry = QuizPhase::entry(&state, answer.as_deref());
        info!(
            resting = %QuizPhase::of_state(&state),
            entry = %entry,
            categories = state.categories.len(),
            "Starting quiz turn"
        );

        // Phase 1: fold the answer into the ledger
        if entry == QuizPhase::UpdatingProbabilities
            && let (Some(previous), Some(answer)) =
                (state.current_category.as_deref(), answer.as_deref())
        {
            state.categories = self
                .update_probabilities(previous, answer, &state.categories, &cancellation_token)
                .await?;
        }

        // Phase 2: next question
        let question = self
            .next_question(&state.categories, &cancellation_token)
            .await?;

        // Phase 3: resolve
        if let Some(winner) = find_winner(&state.categories, self.behavior.threshold) {
            info!(
                phase = %QuizPhase::Resolved,
                winner = %winner.name,
                probability = winner.probability,
                "Quiz resolved"
            );
            return Ok(TurnOutcome::Resolved(Verdict::new(winner.name.clone())));
        }

        let target = leading_category(&state.categories).map(|c| c.name.clone());
        debug!(leading = ?target, "Next question framed around leading category");

        state.current_question = Some(question);
        state.current_category = target;

        info!(phase = %QuizPhase::of_state(&state), "Quiz turn complete");
        Ok(TurnOutcome::InProgress(state))
    }

    /// Ask the model to revise probabilities and apply them.
    ///
    /// Returns the new category list; `categories` is never modified.
    async fn update_probabilities(
        &self,
        previous_category: &str,
        answer: &str,
        categories: &[Category],
        cancellation_token: &Option<CancellationToken>,
    ) -> Result<Vec<Category>, QuizTurnError> {
        info!(phase = %QuizPhase::UpdatingProbabilities, previous_category, "Updating probabilities");

        let prompt = QuizPromptTemplate::update_prompt(previous_category, answer, categories);
        let raw = complete_with_retry(
            self.gateway.as_ref(),
            &prompt,
            "probability_update",
            &self.behavior.retry,
            self.conversation_logger.as_ref(),
            cancellation_token,
        )
        .await?;

        let updates = parse_probability_update(&raw).inspect_err(|e| {
            warn!(error = %e, "Error parsing probability update as JSON");
        })?;

        let mut updated = apply_update(categories, &updates).inspect_err(|e| {
            warn!(error = %e, "Rejected probability update");
        })?;

        if self.behavior.renormalize {
            updated = renormalize(&updated);
        }

        debug!(categories = %QuizPromptTemplate::format_categories(&updated), "Ledger updated");
        Ok(updated)
    }

    /// Ask the model for the next question.
    async fn next_question(
        &self,
        categories: &[Category],
        cancellation_token: &Option<CancellationToken>,
    ) -> Result<String, QuizTurnError> {
        check_cancelled(cancellation_token)?;
        info!(phase = %QuizPhase::SelectingNextQuestion, "Generating next question");

        let prompt = QuizPromptTemplate::next_question_prompt(categories);
        let raw = complete_with_retry(
            self.gateway.as_ref(),
            &prompt,
            "next_question",
            &self.behavior.retry,
            self.conversation_logger.as_ref(),
            cancellation_token,
        )
        .await?;

        parse_question_text(&raw)
            .inspect_err(|_| warn!("Model returned an empty question"))
            .map_err(QuizTurnError::from)
    }
}
