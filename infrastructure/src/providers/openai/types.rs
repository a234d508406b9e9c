//! Wire types for the OpenAI chat completions API.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl<'a> ChatRequest<'a> {
    /// A single user turn carrying the whole prompt.
    pub fn user_prompt(model: &'a str, prompt: &'a str, max_tokens: Option<u32>) -> Self {
        Self {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Choice {
    pub message: Option<ReplyMessage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReplyMessage {
    pub content: Option<String>,
}

/// `{"error": {"message": ...}}` body sent with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorDetail {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let request = ChatRequest::user_prompt("gpt-4", "Ask me something", None);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "model": "gpt-4",
                "messages": [{"role": "user", "content": "Ask me something"}],
            })
        );
    }

    #[test]
    fn test_request_with_max_tokens() {
        let request = ChatRequest::user_prompt("gpt-4", "hi", Some(64));
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["max_tokens"], 64);
    }

    #[test]
    fn test_response_tolerates_missing_fields() {
        let response: ChatResponse = serde_json::from_str(r#"{"id": "x"}"#).unwrap();
        assert!(response.choices.is_empty());

        let response: ChatResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"role": "assistant"}}]}"#).unwrap();
        assert!(response.choices[0].message.as_ref().unwrap().content.is_none());
    }
}
