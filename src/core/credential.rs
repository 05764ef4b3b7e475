//! Bearer credentials and where they come from.
//!
//! The secret lives only in memory. [`Credential`] never prints its value, so
//! it is safe to carry through `Debug` output and tracing fields.

use std::fmt;

use super::error::LlmError;

/// Source of the API key used to authenticate against the gateway.
#[derive(Clone, PartialEq, Eq)]
pub enum ApiKey {
    /// Read the provider's default environment variable (e.g. `HF_TOKEN`).
    Default,
    /// Read the named environment variable.
    Env(String),
    /// Use the given value directly.
    Custom(String),
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiKey::Default => write!(f, "Default"),
            ApiKey::Env(name) => f.debug_tuple("Env").field(name).finish(),
            ApiKey::Custom(_) => write!(f, "Custom(****)"),
        }
    }
}

impl ApiKey {
    /// Resolve into a credential, using `default_env_var` for [`ApiKey::Default`].
    pub fn resolve(&self, default_env_var: &str) -> Result<Credential, LlmError> {
        match self {
            ApiKey::Default => Credential::from_env(default_env_var),
            ApiKey::Env(name) => Credential::from_env(name),
            ApiKey::Custom(value) => Credential::new(value.clone()),
        }
    }
}

/// A non-empty bearer token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Result<Self, LlmError> {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(LlmError::Authentication {
                message: "Credential is empty".to_string(),
                status_code: None,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn from_env(var: &str) -> Result<Self, LlmError> {
        let value = std::env::var(var)
            .map_err(|_| LlmError::ProviderConfiguration(format!("{var} not set.")))?;
        Self::new(value)
    }

    pub(crate) fn bearer_header(&self) -> (String, String) {
        ("Authorization".to_string(), format!("Bearer {}", self.0))
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential(****)")
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "****")
    }
}
