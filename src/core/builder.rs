use std::marker::PhantomData;
use std::time::Duration;

use crate::completions::CompletionClient;
use crate::provider::{Provider, ProviderConfig};

use super::{
    credential::{ApiKey, Credential},
    error::LlmError,
    http::HttpClientConfig,
    traits::LlmProvider,
    types::{ChatRequest, GenerationConfig, Message, TextResponse},
};

pub struct Init;
pub struct ApiKeySet;
pub struct Configuring;
pub struct MessagesSet;

pub struct LlmBuilder<State> {
    provider: Provider,
    credential: Option<Credential>,
    model: Option<String>,
    messages: Option<Vec<Message>>,
    base_url: Option<String>,
    http_config: HttpClientConfig,
    generation_config: Option<GenerationConfig>,
    _state: PhantomData<State>,
}

impl<State> LlmBuilder<State> {
    fn into_state<Next>(self) -> LlmBuilder<Next> {
        LlmBuilder {
            provider: self.provider,
            credential: self.credential,
            model: self.model,
            messages: self.messages,
            base_url: self.base_url,
            http_config: self.http_config,
            generation_config: self.generation_config,
            _state: PhantomData,
        }
    }

    /// Override the provider's default base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Total time allowed for the request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.http_config.timeout = timeout;
        self
    }

    pub fn http_client_config(mut self, config: HttpClientConfig) -> Self {
        self.http_config = config;
        self
    }

    pub fn generation_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = Some(config);
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.generation_config
            .get_or_insert_with(GenerationConfig::default)
            .max_tokens = Some(max_tokens);
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.generation_config
            .get_or_insert_with(GenerationConfig::default)
            .temperature = Some(temperature);
        self
    }

    pub fn top_p(mut self, top_p: f32) -> Self {
        self.generation_config
            .get_or_insert_with(GenerationConfig::default)
            .top_p = Some(top_p);
        self
    }
}

impl LlmBuilder<Init> {
    pub fn api_key(mut self, api_key: ApiKey) -> Result<LlmBuilder<ApiKeySet>, LlmError> {
        let credential = api_key.resolve(self.provider.default_api_key_env_var())?;
        self.credential = Some(credential);
        Ok(self.into_state())
    }
}

impl LlmBuilder<ApiKeySet> {
    pub fn model(mut self, model_id: &str) -> LlmBuilder<Configuring> {
        self.model = Some(model_id.to_string());
        self.into_state()
    }
}

impl LlmBuilder<Configuring> {
    pub fn messages(mut self, messages: Vec<Message>) -> LlmBuilder<MessagesSet> {
        self.messages = Some(messages);
        self.into_state()
    }
}

impl LlmBuilder<MessagesSet> {
    fn into_parts(self) -> Result<(ProviderConfig, ChatRequest), LlmError> {
        let credential = self.credential.ok_or_else(|| {
            LlmError::ProviderConfiguration("Missing API key.".to_string())
        })?;

        let mut config =
            ProviderConfig::new(self.provider, credential).with_http_config(self.http_config);
        if let Some(base_url) = self.base_url {
            config = config.with_base_url(base_url);
        }

        let request = ChatRequest {
            model: self.model.unwrap_or_default(),
            messages: self.messages.unwrap_or_default(),
            generation_config: self.generation_config,
        };

        Ok((config, request))
    }

    /// Send the request and return the first completion.
    pub async fn complete(self) -> Result<TextResponse, LlmError> {
        let (config, request) = self.into_parts()?;
        request.validate()?;

        let client = CompletionClient::new(config)?;
        client.generate_text(request).await
    }
}

pub mod llm {
    use super::*;

    pub fn with(provider: Provider) -> LlmBuilder<Init> {
        LlmBuilder {
            provider,
            credential: None,
            model: None,
            messages: None,
            base_url: None,
            http_config: HttpClientConfig::default(),
            generation_config: None,
            _state: PhantomData,
        }
    }
}
