use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use portal_core::error::DomainError;
use portal_core::repositories::{LlmProvider, PromptRequest};
use portal_shared::config::LlmSettings;

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: usize,
    temperature: f32,
    stream: bool,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: Option<String>,
}

/// Any OpenAI-compatible `/v1/chat/completions` endpoint (hosted Gemini, llama-server, ...)
#[derive(Clone)]
pub struct OpenAiCompatibleProvider {
    client: Client,
    settings: LlmSettings,
}

impl OpenAiCompatibleProvider {
    pub fn new(settings: LlmSettings) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(settings.timeout_seconds))
            .build()
            .map_err(|e| DomainError::FlowFailed(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client, settings })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.settings.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl LlmProvider for OpenAiCompatibleProvider {
    async fn complete(&self, request: PromptRequest) -> Result<String, DomainError> {
        debug!(flow = %request.flow, model = %self.settings.model, "Calling chat completion");

        let body = ChatCompletionRequest {
            model: &self.settings.model,
            messages: vec![
                ChatMessage { role: "system", content: &request.system },
                ChatMessage { role: "user", content: &request.user },
            ],
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
            stream: false,
            response_format: ResponseFormat { kind: "json_object" },
        };

        let mut call = self.client.post(self.endpoint()).json(&body);
        if let Some(key) = &self.settings.api_key {
            call = call.bearer_auth(key);
        }

        let response = call
            .send()
            .await
            .map_err(|e| DomainError::FlowFailed(format!("Failed to call LLM API: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::FlowFailed(format!(
                "LLM API error: {} - {}",
                status, body
            )));
        }

        let chat_response: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| DomainError::FlowFailed(format!("Failed to parse LLM response: {}", e)))?;

        chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| DomainError::FlowFailed("No choices returned from LLM".to_string()))
    }
}
