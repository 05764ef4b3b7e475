//! Client for the chat completions endpoint.

use async_trait::async_trait;

use crate::{
    Provider,
    core::{ChatRequest, HttpClient, HttpClientConfig, LlmError, LlmProvider, TextResponse},
};

use super::{request::ChatCompletionRequest, response::ChatCompletionResponse};

/// Configuration trait for chat completions gateways.
pub trait CompletionProviderConfig {
    /// Get the provider type
    fn provider(&self) -> Provider;

    /// Validated base URL without a trailing slash (e.g. `https://api.openai.com/v1`)
    fn base_url(&self) -> Result<String, LlmError>;

    /// API endpoint appended to the base URL (e.g. `/chat/completions`)
    fn endpoint(&self) -> &str;

    /// Get the authentication header as (name, value) tuple
    fn auth_header(&self) -> (String, String);

    /// Get additional headers to include with each request
    fn extra_headers(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// Get the HTTP client configuration
    fn http_config(&self) -> HttpClientConfig {
        HttpClientConfig::default()
    }

    /// Get the user agent string
    fn user_agent(&self) -> String {
        format!("quickchat/{}", env!("CARGO_PKG_VERSION"))
    }
}

/// Single-shot client for a chat completions gateway.
pub struct CompletionClient<P: CompletionProviderConfig> {
    pub config: P,
    url: String,
    http: HttpClient,
}

impl<P: CompletionProviderConfig> CompletionClient<P> {
    /// Create a new completion client; fails on an unusable base URL.
    pub fn new(config: P) -> Result<Self, LlmError> {
        let url = format!("{}{}", config.base_url()?, config.endpoint());
        let http = HttpClient::new(config.http_config(), Some(&config.user_agent()))?;

        Ok(Self { config, url, http })
    }

    /// Full URL requests are sent to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send one request to the chat completions endpoint.
    #[tracing::instrument(
        name = "chat_completion",
        skip(self, request),
        fields(
            provider = %self.config.provider(),
            model = %request.model,
            messages = request.messages.len()
        ),
        err(level = "debug")
    )]
    pub async fn make_api_request(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, LlmError> {
        let mut headers = vec![self.config.auth_header()];
        headers.extend(self.config.extra_headers());

        self.http.post_json(&self.url, &headers, request).await
    }
}

#[async_trait]
impl<P> LlmProvider for CompletionClient<P>
where
    P: CompletionProviderConfig + Send + Sync,
{
    async fn generate_text(&self, request: ChatRequest) -> Result<TextResponse, LlmError> {
        request.validate()?;

        let model = request.model.clone();
        let api_request = ChatCompletionRequest::from(request);
        let api_response = self.make_api_request(&api_request).await?;

        let response = api_response.into_text_response(self.config.provider(), &model)?;
        tracing::debug!(
            id = response.metadata.id.as_deref().unwrap_or("-"),
            finish_reason = response.metadata.finish_reason.as_deref().unwrap_or("-"),
            "Completion received"
        );
        Ok(response)
    }
}
