use serde::{Deserialize, Serialize};

/// Configuration for external service connectors
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectorConfig {
    #[serde(default)]
    pub openai: OpenAiConfig,
    #[serde(default)]
    pub content: ContentApiConfig,
}

/// Chat-completion provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAiConfig {
    /// Full URL of the chat-completion endpoint
    pub endpoint: String,
    pub model: String,
    pub temperature: f64,
    /// Bearer key (from env: OPENAI_API_KEY)
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.2,
            api_key: None,
        }
    }
}

/// Editorial content API configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentApiConfig {
    /// Base URL, `/articles` is appended (from env: CONTENT_API_BASE).
    /// Unset means the feature is off and no articles are listed.
    pub base_url: Option<String>,
}
