//! [`LlmGateway`] adapter for OpenAI-compatible chat completions endpoints.

use super::types::{ChatRequest, ChatResponse, ErrorEnvelope};
use async_trait::async_trait;
use quiz_application::ports::llm_gateway::{GatewayError, LlmGateway};
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderMap};
use std::time::Duration;
use tracing::{debug, trace};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for [`OpenAiGateway`]
#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    pub model: String,
    pub base_url: String,
    pub api_key: String,
    pub max_tokens: Option<u32>,
    pub request_timeout: Duration,
}

/// Chat completions client that sends each prompt as one user message.
pub struct OpenAiGateway {
    client: reqwest::Client,
    settings: OpenAiSettings,
    endpoint: String,
}

impl OpenAiGateway {
    pub fn new(settings: OpenAiSettings) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| GatewayError::ConnectionError(format!("HTTP client: {}", e)))?;
        let endpoint = format!(
            "{}/v1/chat/completions",
            settings.base_url.trim_end_matches('/')
        );

        Ok(Self {
            client,
            settings,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    fn model(&self) -> &str {
        &self.settings.model
    }

    async fn complete(&self, prompt: &str) -> Result<String, GatewayError> {
        let request =
            ChatRequest::user_prompt(&self.settings.model, prompt, self.settings.max_tokens);

        let response = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, format!("Bearer {}", self.settings.api_key))
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        debug!(status = status.as_u16(), endpoint = %self.endpoint, "Chat completion returned");

        if !status.is_success() {
            let retry_after = retry_after(response.headers());
            let body = response.text().await.unwrap_or_default();
            return Err(classify_status(status, retry_after, &body));
        }

        let body = response.text().await.map_err(transport_error)?;
        trace!(body = %body, "Chat completion body");
        extract_content(&body)
    }
}

fn transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() {
        GatewayError::ConnectionError(e.to_string())
    } else {
        GatewayError::RequestFailed(e.to_string())
    }
}

/// Map a non-2xx status to a gateway error.
pub(crate) fn classify_status(
    status: StatusCode,
    retry_after: Option<Duration>,
    body: &str,
) -> GatewayError {
    let detail = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.trim().to_string());
    let message = if detail.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("HTTP {}: {}", status.as_u16(), detail)
    };

    match status {
        StatusCode::TOO_MANY_REQUESTS => GatewayError::RateLimited { retry_after },
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            GatewayError::AuthenticationError(message)
        }
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => GatewayError::Timeout,
        _ => GatewayError::RequestFailed(message),
    }
}

/// `retry-after-ms` when present, else `retry-after` in seconds.
pub(crate) fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    let read = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite() && *v >= 0.0)
    };

    read("retry-after-ms")
        .and_then(|ms| Duration::try_from_secs_f64(ms / 1000.0).ok())
        .or_else(|| read("retry-after").and_then(|s| Duration::try_from_secs_f64(s).ok()))
}

/// First choice's trimmed content; `EmptyResponse` when there is none.
pub(crate) fn extract_content(body: &str) -> Result<String, GatewayError> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| GatewayError::RequestFailed(format!("Unreadable completion: {}", e)))?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
        .ok_or(GatewayError::EmptyResponse)
}
