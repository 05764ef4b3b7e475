mod config;
pub(crate) mod constants;

pub use config::ProviderConfig;

use std::str::FromStr;

use crate::core::LlmError;

/// Gateways speaking the OpenAI-compatible chat completions protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    HuggingFace,
    OpenAI,
    OpenRouter,
    /// Any other compatible gateway; the base URL must be supplied.
    Custom,
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::HuggingFace => write!(f, "HuggingFace"),
            Provider::OpenAI => write!(f, "OpenAI"),
            Provider::OpenRouter => write!(f, "OpenRouter"),
            Provider::Custom => write!(f, "Custom"),
        }
    }
}

impl FromStr for Provider {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "huggingface" | "hf" => Ok(Provider::HuggingFace),
            "openai" => Ok(Provider::OpenAI),
            "openrouter" => Ok(Provider::OpenRouter),
            "custom" => Ok(Provider::Custom),
            other => Err(LlmError::ProviderConfiguration(format!(
                "Unsupported provider '{other}'"
            ))),
        }
    }
}

impl Provider {
    /// Get the default environment variable name for this provider's API key
    pub fn default_api_key_env_var(&self) -> &'static str {
        match self {
            Provider::HuggingFace => constants::huggingface::API_KEY_ENV_VAR,
            Provider::OpenAI => constants::openai::API_KEY_ENV_VAR,
            Provider::OpenRouter => constants::openrouter::API_KEY_ENV_VAR,
            Provider::Custom => constants::custom::API_KEY_ENV_VAR,
        }
    }

    /// Base URL used when none is configured. `Custom` has none.
    pub fn default_base_url(&self) -> Option<&'static str> {
        match self {
            Provider::HuggingFace => Some(constants::huggingface::API_BASE),
            Provider::OpenAI => Some(constants::openai::API_BASE),
            Provider::OpenRouter => Some(constants::openrouter::API_BASE),
            Provider::Custom => None,
        }
    }
}
