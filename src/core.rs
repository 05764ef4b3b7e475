pub mod builder;
pub mod credential;
pub mod error;
pub mod http;
pub mod traits;
pub mod types;

pub use credential::{ApiKey, Credential};
pub use error::LlmError;
pub use http::{HttpClient, HttpClientConfig};
pub use traits::LlmProvider;
pub use types::{
    ChatRequest, ChatRole, GenerationConfig, LanguageModelUsage, Message, ResponseMetadata,
    TextResponse,
};
