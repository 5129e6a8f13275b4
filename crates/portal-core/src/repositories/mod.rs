//! Port traits implemented by adapters

pub mod client_state_store;
pub mod llm_provider;

pub use client_state_store::ClientStateStore;
pub use llm_provider::{LlmProvider, PromptRequest};

#[cfg(test)]
pub use client_state_store::MockClientStateStore;
#[cfg(test)]
pub use llm_provider::MockLlmProvider;
