// src/config.rs
use tracing::info;

/// Connection settings for the external semantic completion service.
#[derive(Debug, Clone)]
pub struct AiServiceConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl AiServiceConfig {
    /// Read service settings from the environment at boot. Returns None
    /// when no API key is set; the engine then runs rule-only. The
    /// engine itself never touches the environment.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("SEMANTIC_API_KEY").ok()?;
        let base_url =
            std::env::var("SEMANTIC_API_URL").unwrap_or_else(|_| "https://api0.ai".to_string());

        Some(Self {
            api_key,
            base_url,
            timeout_seconds: 60,
        })
    }
}

/// Full engine configuration, injected at construction time.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// None disables the AI scorer entirely; every run is rule-only with
    /// ai_available = false.
    pub ai: Option<AiServiceConfig>,
}

impl EngineConfig {
    pub fn from_env() -> Self {
        let ai = AiServiceConfig::from_env();
        match &ai {
            Some(config) => info!("AI scoring enabled via {}", config.base_url),
            None => info!("SEMANTIC_API_KEY not set, matching runs will be rule-only"),
        }
        Self { ai }
    }

    pub fn rule_only() -> Self {
        Self { ai: None }
    }

    pub fn with_ai(ai: AiServiceConfig) -> Self {
        Self { ai: Some(ai) }
    }
}
