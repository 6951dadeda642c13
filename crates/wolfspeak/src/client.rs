//! Single-turn chat completion client.
//!
//! [`ChatClient::complete`] sends one request (optional system message plus
//! the composed prompt as a single user message) to an OpenAI-compatible
//! chat completions endpoint and returns the first choice's text. The API
//! key is resolved on every call; nothing is retried.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{ClientError, CompletionError};

// ── Constants ──────────────────────────────────────────────────────

pub const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

pub const DEFAULT_MODEL: &str = "gpt-4o";

pub const DEFAULT_TEMPERATURE: f32 = 0.7;

// ── Configuration ──────────────────────────────────────────────────

/// Where the API key comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// Read the named environment variable on every call.
    Env(String),
    /// A key supplied directly by the caller.
    Key(String),
}

impl Credential {
    /// Resolve the key. Unset and empty both count as missing.
    pub fn resolve(&self) -> Result<String, ClientError> {
        let (key, var) = match self {
            Credential::Env(var) => (std::env::var(var).ok(), Some(var)),
            Credential::Key(key) => (Some(key.clone()), None),
        };
        key.filter(|k| !k.is_empty())
            .ok_or_else(|| ClientError::MissingCredential {
                var: var.cloned(),
            })
    }
}

impl Default for Credential {
    fn default() -> Self {
        Credential::Env(API_KEY_ENV.to_string())
    }
}

/// Transport settings for [`ChatClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Chat completions URL. Default: [`OPENAI_CHAT_URL`].
    pub endpoint: String,
    /// Default: the `OPENAI_API_KEY` environment variable.
    pub credential: Credential,
    /// Whole-request timeout. Default: none, the transport default applies.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: OPENAI_CHAT_URL.to_string(),
            credential: Credential::default(),
            timeout: None,
            user_agent: concat!("wolfspeak/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_credential(mut self, credential: Credential) -> Self {
        self.credential = credential;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Per-call model parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionParams {
    /// Default: [`DEFAULT_MODEL`].
    pub model: String,
    /// Default: [`DEFAULT_TEMPERATURE`].
    pub temperature: f32,
    /// Omitted from the request when `None`.
    pub max_output_tokens: Option<u32>,
    /// Optional leading system message.
    pub system: Option<String>,
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: None,
            system: None,
        }
    }
}

// ── Wire types ─────────────────────────────────────────────────────

/// Chat completion request body.
#[derive(Serialize, Debug)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Optional system message first, then the prompt as the only user turn.
    pub fn new(prompt: &str, params: &CompletionParams) -> Self {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = params.system.as_deref().filter(|s| !s.is_empty()) {
            messages.push(Message::system(system));
        }
        messages.push(Message::user(prompt));
        Self {
            model: params.model.clone(),
            messages,
            temperature: params.temperature,
            max_tokens: params.max_output_tokens,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

#[derive(Deserialize, Debug)]
struct RawChatResponse {
    choices: Option<Vec<RawChoice>>,
    error: Option<ApiErrorResponse>,
    #[serde(default)]
    usage: Option<UsageInfo>,
}

#[derive(Deserialize, Debug)]
struct RawChoice {
    message: RawResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Deserialize, Debug)]
struct RawResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ApiErrorResponse {
    message: String,
}

/// Token usage statistics.
#[derive(Deserialize, Debug, Clone)]
pub struct UsageInfo {
    pub prompt_tokens: Option<u32>,
    pub completion_tokens: Option<u32>,
    pub total_tokens: Option<u32>,
}

/// Pull the first choice's text out of a raw response body.
///
/// `null` content is an empty string; a missing `choices` array, an empty
/// one, or a choice without a `message` is malformed.
fn extract_text(body: &str) -> Result<String, CompletionError> {
    let parsed: RawChatResponse =
        serde_json::from_str(body).map_err(|e| CompletionError::Malformed(e.to_string()))?;

    if let Some(err) = parsed.error {
        return Err(CompletionError::Provider {
            message: err.message,
        });
    }

    if let Some(ref usage) = parsed.usage {
        debug!(
            "Token usage: prompt={}, completion={}, total={}",
            usage.prompt_tokens.unwrap_or(0),
            usage.completion_tokens.unwrap_or(0),
            usage.total_tokens.unwrap_or(0),
        );
    }

    let choice = parsed
        .choices
        .ok_or_else(|| CompletionError::Malformed("response has no 'choices' field".into()))?
        .into_iter()
        .next()
        .ok_or_else(|| CompletionError::Malformed("response has an empty 'choices' list".into()))?;

    debug!(
        finish_reason = choice.finish_reason.as_deref().unwrap_or("-"),
        "completion choice received"
    );
    Ok(choice.message.content.unwrap_or_default())
}

// ── Client ─────────────────────────────────────────────────────────

/// Async HTTP client for an OpenAI-compatible chat completions endpoint.
///
/// Safe to share across tasks; each [`complete`](Self::complete) call is
/// independent.
#[derive(Debug, Clone)]
pub struct ChatClient {
    client: reqwest::Client,
    endpoint: String,
    credential: Credential,
}

impl ChatClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(CompletionError::Transport)?;
        Ok(Self {
            client,
            endpoint: config.endpoint,
            credential: config.credential,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send `prompt` and return the model's text unmodified.
    pub async fn complete(
        &self,
        prompt: &str,
        params: &CompletionParams,
    ) -> Result<String, ClientError> {
        let api_key = self.credential.resolve()?;
        let body = ChatRequest::new(prompt, params);

        debug!(
            "LLM request: model={}, messages={}, max_tokens={:?}, temp={}",
            body.model,
            body.messages.len(),
            body.max_tokens,
            body.temperature,
        );
        trace!(
            "Request payload size: {} bytes",
            serde_json::to_string(&body).map_or(0, |s| s.len())
        );

        let start = Instant::now();

        let resp = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(CompletionError::Transport)?;

        let status = resp.status();
        let text = resp.text().await.map_err(CompletionError::Transport)?;

        debug!(
            "LLM response: HTTP {} in {:.1}s ({} bytes)",
            status,
            start.elapsed().as_secs_f64(),
            text.len()
        );

        if !status.is_success() {
            return Err(CompletionError::HttpStatus {
                status: status.as_u16(),
                body: text,
            }
            .into());
        }

        let content = extract_text(&text)?;
        debug!("LLM output: {} chars text", content.len());
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_without_system_has_single_user_message() {
        let req = ChatRequest::new("speak", &CompletionParams::default());
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["model"], "gpt-4o");
        assert_eq!(json["messages"].as_array().unwrap().len(), 1);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "speak");
        assert!(json.get("max_tokens").is_none());
    }

    #[test]
    fn request_with_system_leads_with_it() {
        let params = CompletionParams {
            system: Some("stay in character".into()),
            max_output_tokens: Some(128),
            temperature: 0.0,
            ..Default::default()
        };
        let json = serde_json::to_value(ChatRequest::new("speak", &params)).unwrap();
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["max_tokens"], 128);
        // Zero temperature is still sent.
        assert_eq!(json["temperature"], 0.0);
    }

    #[test]
    fn extract_text_returns_first_choice() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"first"}},{"message":{"content":"second"}}]}"#;
        assert_eq!(extract_text(body).unwrap(), "first");
    }

    #[test]
    fn null_content_is_empty_string() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#;
        assert_eq!(extract_text(body).unwrap(), "");
    }

    #[test]
    fn missing_choices_is_malformed() {
        let err = extract_text(r#"{"id":"x"}"#).unwrap_err();
        assert!(matches!(err, CompletionError::Malformed(_)));
    }

    #[test]
    fn empty_choices_is_malformed() {
        let err = extract_text(r#"{"choices":[]}"#).unwrap_err();
        assert!(matches!(err, CompletionError::Malformed(_)));
    }

    #[test]
    fn choice_without_message_is_malformed() {
        let err = extract_text(r#"{"choices":[{"index":0}]}"#).unwrap_err();
        assert!(matches!(err, CompletionError::Malformed(_)));
    }

    #[test]
    fn provider_error_object_is_reported() {
        let err = extract_text(r#"{"error":{"message":"quota exceeded"}}"#).unwrap_err();
        assert!(matches!(err, CompletionError::Provider { message } if message == "quota exceeded"));
    }

    #[test]
    fn non_json_body_is_malformed() {
        let err = extract_text("<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, CompletionError::Malformed(_)));
    }

    #[test]
    fn direct_key_resolves_and_empty_key_is_missing() {
        assert_eq!(Credential::Key("k".into()).resolve().unwrap(), "k");
        let err = Credential::Key(String::new()).resolve().unwrap_err();
        assert!(matches!(err, ClientError::MissingCredential { var: None }));
        assert!(!err.to_string().contains("environment"));
    }

    #[test]
    fn unset_env_var_is_missing_credential() {
        let var = "WOLFSPEAK_TEST_KEY_THAT_IS_NEVER_SET";
        match Credential::Env(var.into()).resolve() {
            Err(ClientError::MissingCredential { var: v }) => assert_eq!(v.as_deref(), Some(var)),
            other => panic!("expected MissingCredential, got {other:?}"),
        }
    }

    #[test]
    fn default_config_targets_openai() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, OPENAI_CHAT_URL);
        assert_eq!(config.credential, Credential::Env(API_KEY_ENV.into()));
        assert!(config.timeout.is_none());
    }
}
