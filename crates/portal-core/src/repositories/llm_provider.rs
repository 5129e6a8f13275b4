//! LLM provider trait (port)

use async_trait::async_trait;
use serde::Serialize;
use crate::error::DomainError;

/// One single-shot prompt. The model is asked to answer with a JSON object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptRequest {
    /// Flow name, lets adapters and logs tell the flows apart.
    pub flow: String,
    pub system: String,
    pub user: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Raw completion text for the prompt.
    async fn complete(&self, request: PromptRequest) -> Result<String, DomainError>;
}
