//! External Service Connectors
//!
//! Adapters for the chat-completion provider and the editorial content API.
//! Routes depend on the traits only, so tests inject the `mock` connectors
//! instead of reaching the network.

pub mod config;
pub mod content_service;
pub mod errors;
pub mod openai;

pub use config::{ConnectorConfig, ContentApiConfig, OpenAiConfig};
pub use content_service::{ContentApiClient, ContentConnector};
pub use errors::ConnectorError;
pub use openai::{ChatConnector, OpenAiClient};

use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

fn http_client(timeout: Duration) -> Result<reqwest::Client, ConnectorError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(format!("showcase/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|err| ConnectorError::Internal(format!("HTTP client error: {}", err)))
}

/// Decode a response body that must be a JSON object or array.
fn parse_document(bytes: &[u8]) -> Result<Value, ConnectorError> {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(value @ (Value::Object(_) | Value::Array(_))) => Ok(value),
        Ok(_) => Err(ConnectorError::InvalidResponse(
            "expected a JSON object or array".to_string(),
        )),
        Err(err) => Err(ConnectorError::InvalidResponse(err.to_string())),
    }
}

pub fn init_chat(
    config: &ConnectorConfig,
    timeout: Duration,
) -> Result<Arc<dyn ChatConnector>, ConnectorError> {
    let client = OpenAiClient::new(&config.openai, timeout)?;
    if config.openai.api_key.as_deref().map_or(true, |key| key.trim().is_empty()) {
        tracing::warn!("OPENAI_API_KEY not set - /api/ask will answer with an error");
    } else {
        tracing::info!("AI chat connector initialized ({})", config.openai.endpoint);
    }

    Ok(Arc::new(client))
}

pub fn init_content(
    config: &ConnectorConfig,
    timeout: Duration,
) -> Result<Arc<dyn ContentConnector>, ConnectorError> {
    let client = ContentApiClient::new(&config.content, timeout)?;
    if client.is_configured() {
        tracing::info!("Content API connector initialized");
    } else {
        tracing::warn!("CONTENT_API_BASE not set - article list will be empty");
    }

    Ok(Arc::new(client))
}
