use async_trait::async_trait;

use super::{
    error::LlmError,
    types::{ChatRequest, TextResponse},
};

#[async_trait]
pub trait LlmProvider {
    /// Send one chat request and return the first completion.
    async fn generate_text(&self, request: ChatRequest) -> Result<TextResponse, LlmError>;
}
