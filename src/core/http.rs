//! Shared HTTP client for all providers.
//!
//! Every call is a single attempt: failures are mapped onto [`LlmError`] and
//! returned to the caller as-is.

use std::time::Duration;

use reqwest::StatusCode;
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use super::error::LlmError;

/// Configuration for the underlying HTTP transport
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Total time allowed for one request, connect through body.
    pub timeout: Duration,
    pub connect_timeout: Option<Duration>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            connect_timeout: Some(Duration::from_secs(10)),
        }
    }
}

pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration.
    pub fn new(config: HttpClientConfig, user_agent: Option<&str>) -> Result<Self, LlmError> {
        let default_ua = format!("quickchat/{}", env!("CARGO_PKG_VERSION"));
        let ua = user_agent.unwrap_or(&default_ua);

        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(ua);
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        let client = builder.build().map_err(|e| {
            LlmError::ProviderConfiguration(format!("Failed to build reqwest client: {e}"))
        })?;

        Ok(Self { client })
    }

    /// Make a POST request with a JSON body and decode the JSON answer.
    ///
    /// 401 and 403 become [`LlmError::Authentication`], every other
    /// non-success status becomes [`LlmError::Api`]. A success status with a
    /// blank body is [`LlmError::EmptyResponse`]; one that is not valid JSON
    /// for `Res` is [`LlmError::Parse`].
    #[tracing::instrument(
        name = "http_post_json",
        skip(self, headers, body),
        fields(url = %url),
        err(level = "debug")
    )]
    pub async fn post_json<Req, Res>(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &Req,
    ) -> Result<Res, LlmError>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let mut req_builder = self.client.post(url).json(body);
        for (name, value) in headers {
            req_builder = req_builder.header(name, value);
        }

        let res = req_builder.send().await.map_err(|e| {
            debug!(error = %e, timeout = e.is_timeout(), "HTTP request failed");
            LlmError::Network {
                message: describe_transport_error(&e),
                source: Box::new(e),
            }
        })?;

        let status = res.status();
        let response_text = res.text().await.map_err(|e| LlmError::Network {
            message: "Failed to read response body".to_string(),
            source: Box::new(e),
        })?;

        if !status.is_success() {
            debug!(status = %status, "API returned error status");
            return Err(status_error(status, &response_text));
        }

        debug!(status = %status, bytes = response_text.len(), "HTTP request successful");

        if response_text.trim().is_empty() {
            return Err(LlmError::EmptyResponse);
        }

        serde_json::from_str(&response_text).map_err(|e| LlmError::Parse {
            message: "Failed to parse API response".to_string(),
            source: Box::new(e),
        })
    }
}

fn describe_transport_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "Request timed out".to_string()
    } else if e.is_connect() {
        "Failed to connect to gateway".to_string()
    } else {
        "Request failed".to_string()
    }
}

fn status_error(status: StatusCode, body: &str) -> LlmError {
    let message = extract_error_message(body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    });

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LlmError::Authentication {
            message,
            status_code: Some(status.as_u16()),
        },
        _ => LlmError::Api {
            message,
            status_code: status.as_u16(),
        },
    }
}

/// Pull the human-readable message out of a gateway error body.
///
/// Handles `{"error": {"message": ..}}`, `{"error": ".."}`, `{"message": ..}`
/// and falls back to the raw text.
fn extract_error_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return Some(body.to_string());
    };

    let message = match value.get("error") {
        Some(serde_json::Value::String(s)) => Some(s.clone()),
        Some(err) => err
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string),
        None => value
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string),
    };

    Some(message.unwrap_or_else(|| body.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{Mock, MockServer, ResponseTemplate, matchers::method};

    #[test]
    fn extracts_openai_style_error() {
        let body = r#"{"error":{"message":"The model `nope` does not exist","type":"invalid_request_error"}}"#;
        assert_eq!(
            extract_error_message(body).as_deref(),
            Some("The model `nope` does not exist")
        );
    }

    #[test]
    fn extracts_string_error() {
        let body = r#"{"error":"Invalid credentials in Authorization header"}"#;
        assert_eq!(
            extract_error_message(body).as_deref(),
            Some("Invalid credentials in Authorization header")
        );
    }

    #[test]
    fn falls_back_to_raw_body() {
        assert_eq!(
            extract_error_message("Bad Gateway upstream").as_deref(),
            Some("Bad Gateway upstream")
        );
        assert_eq!(extract_error_message("   "), None);
    }

    #[test]
    fn maps_statuses_to_error_kinds() {
        match status_error(StatusCode::UNAUTHORIZED, "") {
            LlmError::Authentication {
                message,
                status_code: Some(401),
            } => assert_eq!(message, "Unauthorized"),
            other => panic!("Expected Authentication, got {other:?}"),
        }

        assert!(matches!(
            status_error(StatusCode::FORBIDDEN, "{}"),
            LlmError::Authentication {
                status_code: Some(403),
                ..
            }
        ));

        assert!(matches!(
            status_error(StatusCode::NOT_FOUND, r#"{"error":"Model not found"}"#),
            LlmError::Api {
                status_code: 404,
                ..
            }
        ));
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn test_client() -> HttpClient {
        HttpClient::new(
            HttpClientConfig {
                timeout: Duration::from_secs(5),
                connect_timeout: None,
            },
            None,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn blank_success_body_is_empty_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("  \n"))
            .mount(&server)
            .await;

        let result: Result<serde_json::Value, _> = test_client()
            .post_json(&server.uri(), &[], &serde_json::json!({}))
            .await;

        assert!(matches!(result, Err(LlmError::EmptyResponse)));
    }

    #[tokio::test]
    async fn failures_are_not_logged_at_error_level() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
            .mount(&server)
            .await;

        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::ERROR)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let result: Result<serde_json::Value, _> = test_client()
            .post_json(&server.uri(), &[], &serde_json::json!({}))
            .await;

        assert!(matches!(result, Err(LlmError::Api { status_code: 503, .. })));
        let captured = logs.0.lock().unwrap();
        assert!(
            captured.is_empty(),
            "unexpected error output: {}",
            String::from_utf8_lossy(&captured)
        );
    }
}
