use super::config::OpenAiConfig;
use super::errors::ConnectorError;
use crate::models::ChatMessage;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;

#[async_trait]
pub trait ChatConnector: Send + Sync {
    /// Send the conversation and return the provider's decoded payload untouched.
    async fn chat(&self, messages: &[ChatMessage]) -> Result<Value, ConnectorError>;
}

pub struct OpenAiClient {
    endpoint: String,
    model: String,
    temperature: f64,
    api_key: Option<String>,
    http_client: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(config: &OpenAiConfig, timeout: Duration) -> Result<Self, ConnectorError> {
        Ok(Self {
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            api_key: config.api_key.clone(),
            http_client: super::http_client(timeout)?,
        })
    }

    fn api_key(&self) -> Result<&str, ConnectorError> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                tracing::error!("OPENAI_API_KEY is not configured");
                ConnectorError::NotConfigured("OPENAI_API_KEY is not configured".to_string())
            })
    }
}

#[async_trait]
impl ChatConnector for OpenAiClient {
    #[tracing::instrument(name = "AI chat call.", skip(self, messages), fields(model = %self.model))]
    async fn chat(&self, messages: &[ChatMessage]) -> Result<Value, ConnectorError> {
        let api_key = self.api_key()?;
        let body = json!({
            "model": self.model,
            "messages": messages,
            "temperature": self.temperature,
        });

        let response = self
            .http_client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| {
                tracing::error!(error = %err, "AI chat call failed");
                ConnectorError::from(err)
            })?;

        let bytes = response.bytes().await.map_err(|err| {
            tracing::error!(error = %err, "AI chat call failed while reading body");
            ConnectorError::from(err)
        })?;

        super::parse_document(&bytes).map_err(|err| {
            tracing::error!(error = %err, "Unexpected response from AI provider");
            err
        })
    }
}

pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Records every call; answers with a fixed payload or fails as unreachable.
    pub struct MockChatConnector {
        reply: Option<Value>,
        calls: AtomicUsize,
        last_messages: Mutex<Vec<ChatMessage>>,
    }

    impl MockChatConnector {
        pub fn replying(reply: Value) -> Self {
            Self {
                reply: Some(reply),
                calls: AtomicUsize::new(0),
                last_messages: Mutex::new(vec![]),
            }
        }

        pub fn unreachable() -> Self {
            Self {
                reply: None,
                calls: AtomicUsize::new(0),
                last_messages: Mutex::new(vec![]),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn last_messages(&self) -> Vec<ChatMessage> {
            self.last_messages
                .lock()
                .map(|messages| messages.clone())
                .unwrap_or_default()
        }
    }

    #[async_trait]
    impl ChatConnector for MockChatConnector {
        async fn chat(&self, messages: &[ChatMessage]) -> Result<Value, ConnectorError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Ok(mut last) = self.last_messages.lock() {
                *last = messages.to_vec();
            }

            self.reply.clone().ok_or_else(|| {
                ConnectorError::ServiceUnavailable("Connection failed: mock".to_string())
            })
        }
    }
}
