use thiserror::Error;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum LlmError {
    /// The credential was empty or rejected by the gateway (401/403).
    #[error("Authentication failed: {message}")]
    Authentication {
        message: String,
        status_code: Option<u16>,
    },

    /// The request never produced an HTTP response (DNS, refused, timeout).
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: BoxedSource,
    },

    /// The gateway answered with a non-success status.
    #[error("API error ({status_code}): {message}")]
    Api { message: String, status_code: u16 },

    #[error("Response contained no completion text")]
    EmptyResponse,

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        #[source]
        source: BoxedSource,
    },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Provider configuration error: {0}")]
    ProviderConfiguration(String),
}

impl LlmError {
    /// Stable name of the error category, used for process-level reporting.
    pub fn kind(&self) -> &'static str {
        match self {
            LlmError::Authentication { .. } => "AuthenticationError",
            LlmError::Network { .. } => "TransportError",
            LlmError::Api { .. } => "RemoteAPIError",
            LlmError::EmptyResponse => "EmptyResponseError",
            LlmError::Parse { .. } => "ParseError",
            LlmError::InvalidRequest(_) => "InvalidRequestError",
            LlmError::ProviderConfiguration(_) => "ConfigurationError",
        }
    }

    /// HTTP status reported by the gateway, if the error came from one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            LlmError::Authentication { status_code, .. } => *status_code,
            LlmError::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}
