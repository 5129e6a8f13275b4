//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{DEFAULT_COOKIE_MAX_AGE, DOCTOR_AUTH_KEY};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub llm: LlmSettings,
    pub client_state: ClientStateSettings,
    pub telemetry: TelemetrySettings,
    #[serde(default)]
    pub cors: CorsSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LlmSettings {
    /// `mock` or `openai`
    pub provider: String,
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    pub model: String,
    pub timeout_seconds: u64,
    pub temperature: f32,
    pub max_tokens: usize,
    #[serde(default)]
    pub simulated_latency_ms: u64,
}

/// Where per-client state (auth flag, sidebar preference) is kept.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StateBackend {
    /// One cookie jar per browser
    #[default]
    Cookie,
    /// One process-wide map, lost on restart
    Memory,
    /// One process-wide JSON file at `file_path`
    File,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ClientStateSettings {
    pub auth_key: String,
    pub cookie_max_age_seconds: i64,
    pub secure_cookies: bool,
    #[serde(default)]
    pub backend: StateBackend,
    #[serde(default)]
    pub file_path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TelemetrySettings {
    pub filter: String,
    pub json: bool,
    #[serde(default)]
    pub log_dir: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CorsSettings {
    pub allowed_origin: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("PORTAL")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        config.try_deserialize()
    }

    /// Built-in defaults only, without files or environment.
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::builder()?.build()?.try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "portal-server")?
            .set_default("llm.provider", "mock")?
            .set_default("llm.base_url", "http://127.0.0.1:8081")?
            .set_default("llm.model", "gemini-2.0-flash")?
            .set_default("llm.timeout_seconds", 60)?
            .set_default("llm.temperature", 0.7)?
            .set_default("llm.max_tokens", 1024)?
            .set_default("llm.simulated_latency_ms", 0)?
            .set_default("client_state.auth_key", DOCTOR_AUTH_KEY)?
            .set_default("client_state.cookie_max_age_seconds", DEFAULT_COOKIE_MAX_AGE)?
            .set_default("client_state.secure_cookies", false)?
            .set_default("telemetry.filter", "info,portal_api=debug,portal_core=debug")?
            .set_default("telemetry.json", true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_deserialize() {
        let config = AppConfig::defaults().unwrap();
        assert_eq!(config.app.port, 8080);
        assert_eq!(config.llm.provider, "mock");
        assert_eq!(config.client_state.auth_key, DOCTOR_AUTH_KEY);
        assert_eq!(config.client_state.cookie_max_age_seconds, DEFAULT_COOKIE_MAX_AGE);
        assert!(config.llm.api_key.is_none());
        assert!(config.cors.allowed_origin.is_none());
        assert_eq!(config.client_state.backend, StateBackend::Cookie);
    }

    #[test]
    fn test_file_backend_from_source() {
        let config: AppConfig = AppConfig::builder()
            .unwrap()
            .set_override("client_state.backend", "file")
            .unwrap()
            .set_override("client_state.file_path", "/tmp/portal-state.json")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.client_state.backend, StateBackend::File);
        assert_eq!(config.client_state.file_path.as_deref(), Some("/tmp/portal-state.json"));
    }
}
