//! OpenAI-compatible chat completions: wire schema and client.

pub mod client;
pub mod request;
pub mod response;

pub use client::{CompletionClient, CompletionProviderConfig};
pub use request::ChatCompletionRequest;
pub use response::ChatCompletionResponse;
