//! quickchat - send one prompt to a chat completions gateway and print the answer.
//!
//! Environment Variables:
//!     HF_TOKEN / OPENAI_API_KEY / OPENROUTER_API_KEY / QUICKCHAT_API_KEY:
//!         credential for the selected provider (or use --api-key-env)
//!     QUICKCHAT_PROVIDER, QUICKCHAT_BASE_URL, QUICKCHAT_MODEL, QUICKCHAT_TIMEOUT
//!     RUST_LOG: log filter for stderr output (default: warn)

use std::io::Write;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use dotenv::dotenv;
use quickchat::{ApiKey, LlmError, Message, Provider, TextResponse, llm};
use tracing_subscriber::EnvFilter;

const DEFAULT_MODEL: &str = "SentientAGI/Dobby-Unhinged-Llama-3.3-70B:fireworks-ai";
const DEFAULT_PROMPT: &str = "Tell me a fun fact about cats.";

/// Send one prompt to an OpenAI-compatible chat completions gateway
#[derive(Parser, Debug)]
#[command(name = "quickchat", version)]
#[command(after_help = r#"Examples:
    # Ask the HuggingFace router (credential in HF_TOKEN)
    quickchat "Tell me a fun fact about cats."

    # Use OpenAI with a different model
    quickchat --provider openai --model gpt-4o-mini "Hello"

    # Any compatible gateway, credential read from MY_GATEWAY_KEY
    quickchat --provider custom --base-url http://localhost:8000/v1 --api-key-env MY_GATEWAY_KEY "Hi"
"#)]
struct Cli {
    /// Prompt sent as the user message
    #[arg(default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Gateway provider (huggingface, openai, openrouter, custom)
    #[arg(long, env = "QUICKCHAT_PROVIDER", default_value = "huggingface", value_parser = parse_provider)]
    provider: Provider,

    /// Override the provider's base URL
    #[arg(long, env = "QUICKCHAT_BASE_URL")]
    base_url: Option<String>,

    /// Model identifier
    #[arg(long, env = "QUICKCHAT_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Optional system message sent before the prompt
    #[arg(long)]
    system: Option<String>,

    /// Environment variable holding the credential (default depends on provider)
    #[arg(long, value_name = "VAR")]
    api_key_env: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "QUICKCHAT_TIMEOUT", default_value_t = 60)]
    timeout: u64,

    /// Maximum number of tokens to generate
    #[arg(long)]
    max_tokens: Option<u32>,

    /// Sampling temperature
    #[arg(long)]
    temperature: Option<f32>,
}

fn parse_provider(s: &str) -> Result<Provider, String> {
    s.parse().map_err(|e: LlmError| e.to_string())
}

impl Cli {
    fn messages(&self) -> Vec<Message> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &self.system {
            messages.push(Message::system(system.clone()));
        }
        messages.push(Message::user(self.prompt.clone()));
        messages
    }

    fn api_key(&self) -> ApiKey {
        match &self.api_key_env {
            Some(var) => ApiKey::Env(var.clone()),
            None => ApiKey::Default,
        }
    }
}

async fn run(cli: Cli) -> Result<TextResponse, LlmError> {
    let mut builder = llm::with(cli.provider)
        .api_key(cli.api_key())?
        .model(&cli.model)
        .timeout(Duration::from_secs(cli.timeout));

    if let Some(base_url) = &cli.base_url {
        builder = builder.base_url(base_url.clone());
    }
    if let Some(max_tokens) = cli.max_tokens {
        builder = builder.max_tokens(max_tokens);
    }
    if let Some(temperature) = cli.temperature {
        builder = builder.temperature(temperature);
    }

    builder.messages(cli.messages()).complete().await
}

/// Write the completion to `out`, or the error kind and message to `err`.
/// Returns the process exit status.
fn report(
    result: Result<TextResponse, LlmError>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> u8 {
    match result {
        Ok(response) => {
            if let Some(usage) = &response.usage {
                tracing::info!(
                    model = %response.metadata.model,
                    prompt_tokens = usage.prompt_tokens,
                    completion_tokens = usage.completion_tokens,
                    "Completion finished"
                );
            }
            match writeln!(out, "{}", response.text) {
                Ok(()) => 0,
                Err(e) => {
                    let _ = writeln!(err, "error[OutputError]: {e}");
                    1
                }
            }
        }
        Err(e) => {
            let _ = writeln!(err, "error[{}]: {e}", e.kind());
            1
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = run(cli).await;

    let code = report(result, &mut std::io::stdout().lock(), &mut std::io::stderr().lock());
    ExitCode::from(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn default_of(id: &str) -> String {
        let command = Cli::command();
        let arg = command
            .get_arguments()
            .find(|a| a.get_id() == id)
            .expect("argument exists");
        arg.get_default_values()
            .first()
            .expect("default value")
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn defaults_match_reference_prompt() {
        assert_eq!(default_of("prompt"), DEFAULT_PROMPT);
        assert_eq!(default_of("model"), DEFAULT_MODEL);
        assert_eq!(default_of("provider"), "huggingface");
        assert_eq!(default_of("timeout"), "60");

        // Env-backed flags are pinned so exported QUICKCHAT_* values don't leak in.
        let cli = Cli::try_parse_from([
            "quickchat",
            "--provider",
            "huggingface",
            "--model",
            DEFAULT_MODEL,
        ])
        .unwrap();
        assert_eq!(cli.provider, Provider::HuggingFace);
        assert_eq!(cli.messages(), vec![Message::user(DEFAULT_PROMPT)]);
        assert_eq!(cli.api_key(), ApiKey::Default);
    }

    #[test]
    fn system_message_comes_first() {
        let cli = Cli::try_parse_from([
            "quickchat",
            "--provider",
            "openai",
            "--system",
            "Be brief.",
            "--api-key-env",
            "MY_KEY",
            "Hello",
        ])
        .unwrap();

        assert_eq!(cli.provider, Provider::OpenAI);
        assert_eq!(
            cli.messages(),
            vec![Message::system("Be brief."), Message::user("Hello")]
        );
        assert_eq!(cli.api_key(), ApiKey::Env("MY_KEY".to_string()));
    }

    #[test]
    fn unknown_provider_is_rejected() {
        assert!(Cli::try_parse_from(["quickchat", "--provider", "nope"]).is_err());
    }

    fn text_response(text: &str) -> TextResponse {
        TextResponse {
            text: text.to_string(),
            usage: None,
            metadata: quickchat::ResponseMetadata {
                provider: Provider::HuggingFace,
                model: DEFAULT_MODEL.to_string(),
                id: None,
                finish_reason: None,
            },
        }
    }

    #[test]
    fn success_prints_only_the_completion() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = report(Ok(text_response("Cats have five toes...")), &mut out, &mut err);

        assert_eq!(code, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "Cats have five toes...\n");
        assert!(err.is_empty());
    }

    #[test]
    fn failure_reports_kind_and_exits_nonzero() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = report(Err(LlmError::EmptyResponse), &mut out, &mut err);

        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "error[EmptyResponseError]: Response contained no completion text\n"
        );
    }

    #[tokio::test]
    async fn failure_output_never_contains_the_credential() {
        let secret = "hf_do_not_print_me";
        // Bind then release a port so nothing is listening on it.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}/v1", listener.local_addr().unwrap());
        drop(listener);

        let result = llm::with(Provider::Custom)
            .api_key(ApiKey::Custom(secret.to_string()))
            .unwrap()
            .model(DEFAULT_MODEL)
            .base_url(base_url)
            .timeout(Duration::from_secs(5))
            .messages(vec![Message::user(DEFAULT_PROMPT)])
            .complete()
            .await;

        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = report(result, &mut out, &mut err);

        let stderr = String::from_utf8(err).unwrap();
        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert!(stderr.starts_with("error[TransportError]: "));
        assert!(!stderr.contains(secret));
    }
}
