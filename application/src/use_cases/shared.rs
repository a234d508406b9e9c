//! Shared utilities for use cases.
//!
//! Contains cancellation checking and the retrying, logged model call used
//! by both prompts of a quiz turn.

use crate::config::RetryPolicy;
use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::use_cases::run_quiz_turn::QuizTurnError;
use quiz_domain::core::string::preview;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Maximum bytes of model text echoed into tracing records
const LOG_PREVIEW_BYTES: usize = 200;

/// Check if cancellation has been requested.
///
/// Returns `Err(QuizTurnError::Cancelled)` if the token exists and is cancelled.
pub(crate) fn check_cancelled(token: &Option<CancellationToken>) -> Result<(), QuizTurnError> {
    if let Some(token) = token
        && token.is_cancelled()
    {
        return Err(QuizTurnError::Cancelled);
    }
    Ok(())
}

/// Sleep for `delay`, waking early with `Cancelled` if the token fires.
async fn backoff_sleep(
    delay: Duration,
    token: &Option<CancellationToken>,
) -> Result<(), QuizTurnError> {
    match token {
        Some(token) => tokio::select! {
            _ = tokio::time::sleep(delay) => Ok(()),
            _ = token.cancelled() => Err(QuizTurnError::Cancelled),
        },
        None => {
            tokio::time::sleep(delay).await;
            Ok(())
        }
    }
}

/// Await one model call, abandoning it if the token fires first.
async fn complete_or_cancel(
    gateway: &dyn LlmGateway,
    prompt: &str,
    purpose: &'static str,
    token: &Option<CancellationToken>,
) -> Result<Result<String, GatewayError>, QuizTurnError> {
    let call = gateway.complete(prompt);
    match token {
        Some(token) => tokio::select! {
            result = call => Ok(result),
            _ = token.cancelled() => {
                warn!(purpose, "Cancelled while waiting for model");
                Err(QuizTurnError::Cancelled)
            }
        },
        None => Ok(call.await),
    }
}

/// Send a prompt, retrying rate-limited attempts per `policy`.
///
/// `purpose` labels the call in logs and the transcript
/// ("probability_update" or "next_question"). Non-rate-limit errors are
/// returned on the first occurrence. A fired token ends the call in flight.
pub(crate) async fn complete_with_retry(
    gateway: &dyn LlmGateway,
    prompt: &str,
    purpose: &'static str,
    policy: &RetryPolicy,
    logger: &dyn ConversationLogger,
    cancellation_token: &Option<CancellationToken>,
) -> Result<String, QuizTurnError> {
    let mut retry = 0u32;

    loop {
        check_cancelled(cancellation_token)?;

        info!(
            purpose,
            model = gateway.model(),
            attempt = retry + 1,
            prompt_bytes = prompt.len(),
            "Submitting prompt"
        );
        debug!(purpose, prompt = %prompt, "Prompt body");
        logger.log(ConversationEvent::new(
            "prompt_submitted",
            serde_json::json!({
                "purpose": purpose,
                "model": gateway.model(),
                "attempt": retry + 1,
                "prompt": prompt,
            }),
        ));

        let error = match complete_or_cancel(gateway, prompt, purpose, cancellation_token).await? {
            Ok(text) => {
                info!(
                    purpose,
                    bytes = text.len(),
                    preview = %preview(&text, LOG_PREVIEW_BYTES),
                    "Response received"
                );
                logger.log(ConversationEvent::new(
                    "response_received",
                    serde_json::json!({
                        "purpose": purpose,
                        "model": gateway.model(),
                        "bytes": text.len(),
                        "text": text,
                    }),
                ));
                return Ok(text);
            }
            Err(e) => e,
        };

        if error.is_rate_limited()
            && let Some(delay) = policy.delay_for(retry)
        {
            let delay = error
                .retry_after()
                .map_or(delay, |hint| hint.max(delay))
                .min(policy.max_backoff);
            warn!(
                purpose,
                retry = retry + 1,
                max_retries = policy.max_retries,
                delay_ms = delay.as_millis() as u64,
                "Rate limited, backing off"
            );
            backoff_sleep(delay, cancellation_token).await?;
            retry += 1;
            continue;
        }

        return Err(gateway_failure(purpose, error, logger));
    }
}

fn gateway_failure(
    purpose: &'static str,
    error: GatewayError,
    logger: &dyn ConversationLogger,
) -> QuizTurnError {
    error!(purpose, error = %error, "Error calling model");
    logger.log(ConversationEvent::new(
        "gateway_error",
        serde_json::json!({
            "purpose": purpose,
            "error": error.to_string(),
        }),
    ));
    QuizTurnError::Gateway(error)
}
