//! LLM provider adapters

pub mod openai;
pub mod canned;

pub use openai::OpenAiCompatibleProvider;
pub use canned::CannedLlmProvider;

use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use portal_core::error::DomainError;
use portal_core::repositories::LlmProvider;
use portal_shared::config::LlmSettings;

/// Select the adapter named by `llm.provider`.
pub fn build_llm_provider(settings: &LlmSettings) -> Result<Arc<dyn LlmProvider>, DomainError> {
    match settings.provider.as_str() {
        "mock" => {
            info!(latency_ms = settings.simulated_latency_ms, "Using canned LLM provider");
            Ok(Arc::new(CannedLlmProvider::new(Duration::from_millis(
                settings.simulated_latency_ms,
            ))))
        }
        "openai" => {
            info!(base_url = %settings.base_url, model = %settings.model, "Using OpenAI-compatible LLM provider");
            Ok(Arc::new(OpenAiCompatibleProvider::new(settings.clone())?))
        }
        other => Err(DomainError::FlowFailed(format!("Unknown LLM provider: {}", other))),
    }
}
