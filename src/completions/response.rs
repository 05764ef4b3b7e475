//! Response schema of the chat completions endpoint.
//!
//! Only `choices[].message.content` is required. Everything else is optional
//! because compatible gateways differ in what they report.

use serde::{Deserialize, Deserializer, de::DeserializeOwned};

use crate::core::{LanguageModelUsage, LlmError, ResponseMetadata, TextResponse};
use crate::provider::Provider;

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Option<Vec<Choice>>,
    /// Dropped instead of failing the call when the gateway reports it oddly.
    #[serde(default, deserialize_with = "lenient")]
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub index: u32,
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: Option<u32>,
    #[serde(default)]
    pub completion_tokens: Option<u32>,
    #[serde(default)]
    pub total_tokens: Option<u32>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl ChatCompletionResponse {
    /// Consume the first choice. A missing message or missing, null or empty
    /// content is an error.
    pub fn into_text_response(
        self,
        provider: Provider,
        requested_model: &str,
    ) -> Result<TextResponse, LlmError> {
        let choice = self
            .choices
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or(LlmError::EmptyResponse)?;

        let text = choice
            .message
            .and_then(|message| message.content)
            .filter(|content| !content.is_empty())
            .ok_or(LlmError::EmptyResponse)?;

        Ok(TextResponse {
            text,
            usage: self.usage.map(|u| LanguageModelUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u
                    .total_tokens
                    .or_else(|| u.prompt_tokens?.checked_add(u.completion_tokens?)),
            }),
            metadata: ResponseMetadata {
                provider,
                model: self.model.unwrap_or_else(|| requested_model.to_string()),
                id: self.id,
                finish_reason: choice.finish_reason,
            },
        })
    }
}
