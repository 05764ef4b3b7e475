use crate::completions::CompletionProviderConfig;
use crate::core::{Credential, HttpClientConfig, LlmError};

use super::{Provider, constants};

/// Connection settings for one chat completions gateway.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub provider: Provider,
    pub credential: Credential,
    pub base_url: Option<String>,
    /// OpenRouter attribution header
    pub http_referer: Option<String>,
    /// OpenRouter attribution header
    pub x_title: Option<String>,
    pub http_config: HttpClientConfig,
}

impl ProviderConfig {
    pub fn new(provider: Provider, credential: Credential) -> Self {
        Self {
            provider,
            credential,
            base_url: provider.default_base_url().map(str::to_string),
            http_referer: None,
            x_title: None,
            http_config: HttpClientConfig::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_http_config(mut self, config: HttpClientConfig) -> Self {
        self.http_config = config;
        self
    }

    pub fn with_http_referer(mut self, http_referer: impl Into<String>) -> Self {
        self.http_referer = Some(http_referer.into());
        self
    }

    pub fn with_x_title(mut self, x_title: impl Into<String>) -> Self {
        self.x_title = Some(x_title.into());
        self
    }

    /// Base URL checked to be absolute http(s), without a trailing slash.
    pub fn normalized_base_url(&self) -> Result<String, LlmError> {
        let raw = self.base_url.as_deref().ok_or_else(|| {
            LlmError::ProviderConfiguration(format!("{} requires a base URL", self.provider))
        })?;

        let url = reqwest::Url::parse(raw.trim()).map_err(|e| {
            LlmError::ProviderConfiguration(format!("Invalid base URL '{raw}': {e}"))
        })?;

        match url.scheme() {
            "https" => {}
            "http" => tracing::warn!(base_url = %url, "Base URL is not using HTTPS"),
            scheme => {
                return Err(LlmError::ProviderConfiguration(format!(
                    "Unsupported URL scheme '{scheme}' in base URL"
                )));
            }
        }

        Ok(url.as_str().trim_end_matches('/').to_string())
    }
}

impl CompletionProviderConfig for ProviderConfig {
    fn provider(&self) -> Provider {
        self.provider
    }

    fn base_url(&self) -> Result<String, LlmError> {
        self.normalized_base_url()
    }

    fn endpoint(&self) -> &str {
        constants::CHAT_COMPLETIONS_ENDPOINT
    }

    fn auth_header(&self) -> (String, String) {
        self.credential.bearer_header()
    }

    fn extra_headers(&self) -> Vec<(String, String)> {
        let mut headers = Vec::new();

        if let Some(referer) = &self.http_referer {
            headers.push(("HTTP-Referer".to_string(), referer.clone()));
        }

        if let Some(title) = &self.x_title {
            headers.push(("X-Title".to_string(), title.clone()));
        }

        headers
    }

    fn http_config(&self) -> HttpClientConfig {
        self.http_config.clone()
    }
}
