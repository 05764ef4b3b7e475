//! # quickchat
//!
//! Single-shot chat completions against OpenAI-compatible gateways
//! (HuggingFace router, OpenAI, OpenRouter, or any compatible endpoint).
//!
//! One request goes out, the first completion's text comes back. There are no
//! retries and no streaming; failures are returned as [`LlmError`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use quickchat::{llm, ApiKey, Message, Provider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), quickchat::LlmError> {
//!     let response = llm::with(Provider::HuggingFace)
//!         .api_key(ApiKey::Default)?
//!         .model("SentientAGI/Dobby-Unhinged-Llama-3.3-70B:fireworks-ai")
//!         .messages(vec![Message::user("Tell me a fun fact about cats.")])
//!         .complete()
//!         .await?;
//!
//!     println!("{}", response.text);
//!     Ok(())
//! }
//! ```

pub mod completions;
pub mod core;
pub mod provider;

pub use completions::{CompletionClient, CompletionProviderConfig};
pub use crate::core::builder::llm;
pub use crate::core::{
    ApiKey, ChatRequest, ChatRole, Credential, GenerationConfig, HttpClientConfig,
    LanguageModelUsage, LlmError, LlmProvider, Message, ResponseMetadata, TextResponse,
};
pub use provider::{Provider, ProviderConfig};
