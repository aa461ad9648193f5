//! Mistral chat-completions client.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{LlmError, ModelGateway};
use crate::prompt::Prompt;

/// Default model requested from the API.
pub const DEFAULT_MODEL: &str = "mistral-small-latest";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

const CHAT_COMPLETIONS_URL: &str = "https://api.mistral.ai/v1/chat/completions";

/// Long-lived Mistral API client.
///
/// Constructed once at startup and shared read-only across request handlers.
/// When `api_key` is `None` every call short-circuits with
/// [`LlmError::NotConfigured`] without touching the network.
pub struct MistralClient {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl MistralClient {
    pub fn new(api_key: Option<String>) -> Result<Self, LlmError> {
        Self::with_model(api_key, DEFAULT_MODEL, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Build a client with an explicit model and request timeout.
    ///
    /// Fails loudly if the underlying HTTP client cannot be constructed,
    /// rather than falling back to a client without the configured timeout.
    pub fn with_model(
        api_key: Option<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key,
            model: model.into(),
        })
    }

    /// Whether an API key is present.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn chat(&self, prompt: &Prompt, json_only: bool) -> Result<String, LlmError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(LlmError::NotConfigured);
        };

        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            response_format: json_only.then_some(ResponseFormat {
                format_type: "json_object",
            }),
        };

        let resp = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = resp
            .json()
            .await
            .map_err(|e| LlmError::MalformedResponse(e.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| LlmError::MalformedResponse("response has no choices".into()))?;

        Ok(content)
    }
}

impl ModelGateway for MistralClient {
    fn complete<'a>(
        &'a self,
        prompt: &'a Prompt,
        json_only: bool,
    ) -> Pin<Box<dyn Future<Output = Result<String, LlmError>> + Send + 'a>> {
        Box::pin(self.chat(prompt, json_only))
    }
}
