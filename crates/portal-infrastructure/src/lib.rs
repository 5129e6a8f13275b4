//! # Portal Infrastructure
//! 
//! Client-state storage and LLM provider implementations (adapters).

pub mod storage;
pub mod llm;

pub use storage::{build_state_store, FileStateStore, MemoryStateStore};
pub use llm::{build_llm_provider, CannedLlmProvider, OpenAiCompatibleProvider};
