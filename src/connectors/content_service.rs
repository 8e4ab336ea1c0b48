use super::config::ContentApiConfig;
use super::errors::ConnectorError;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

#[async_trait]
pub trait ContentConnector: Send + Sync {
    /// Raw article objects, in the order the content API returned them.
    async fn fetch_articles(&self) -> Result<Vec<Value>, ConnectorError>;
}

pub struct ContentApiClient {
    base_url: Option<String>,
    http_client: reqwest::Client,
}

impl ContentApiClient {
    pub fn new(config: &ContentApiConfig, timeout: Duration) -> Result<Self, ConnectorError> {
        let base_url = config
            .base_url
            .as_deref()
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        Ok(Self {
            base_url,
            http_client: super::http_client(timeout)?,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    /// A bare array is the list. An object wrapping the list under `articles`
    /// or `data` is unwrapped, any other object is passed through as one item.
    fn extract_items(payload: Value) -> Result<Vec<Value>, ConnectorError> {
        match payload {
            Value::Array(items) => Ok(items),
            Value::Object(mut map) => {
                for key in ["articles", "data"] {
                    if let Some(Value::Array(items)) = map.get_mut(key) {
                        return Ok(std::mem::take(items));
                    }
                }
                Ok(vec![Value::Object(map)])
            }
            _ => Err(ConnectorError::InvalidResponse(
                "Malformed content response".to_string(),
            )),
        }
    }
}

#[async_trait]
impl ContentConnector for ContentApiClient {
    #[tracing::instrument(name = "Fetch articles.", skip(self))]
    async fn fetch_articles(&self) -> Result<Vec<Value>, ConnectorError> {
        let Some(base_url) = self.base_url.as_deref() else {
            tracing::debug!("Content API base URL not set, no articles to list");
            return Ok(vec![]);
        };

        let url = format!("{}/articles", base_url);
        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| {
                tracing::error!(error = %err, url = %url, "Unable to fetch editorial content");
                ConnectorError::from(err)
            })?;

        let bytes = response.bytes().await.map_err(ConnectorError::from)?;
        let payload = super::parse_document(&bytes)?;

        Self::extract_items(payload).map_err(|err| {
            tracing::error!(error = %err, "Malformed content response");
            err
        })
    }
}

pub mod mock {
    use super::*;

    #[derive(Default)]
    pub struct MockContentConnector {
        pub articles: Vec<Value>,
    }

    #[async_trait]
    impl ContentConnector for MockContentConnector {
        async fn fetch_articles(&self) -> Result<Vec<Value>, ConnectorError> {
            Ok(self.articles.clone())
        }
    }
}
