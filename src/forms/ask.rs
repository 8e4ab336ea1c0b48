use super::fields;
use crate::models::ChatMessage;
use serde::Deserialize;

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskForm {
    #[serde(deserialize_with = "fields::scalar")]
    pub prompt: String,
    #[serde(default, deserialize_with = "fields::optional_scalar")]
    pub system_prompt: Option<String>,
}

impl AskForm {
    pub const REQUIRED: &'static [&'static str] = &["prompt"];

    /// `[system, user]`, the system prompt falling back to the default when absent.
    pub fn messages(self) -> Vec<ChatMessage> {
        let system = self
            .system_prompt
            .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string());

        vec![
            ChatMessage::system(system),
            ChatMessage::user(self.prompt.trim()),
        ]
    }
}
