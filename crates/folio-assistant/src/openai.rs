//! [`OpenAiBackend`] is a [`CompletionBackend`] speaking the OpenAI chat
//! completions wire format.
//!
//! Any OpenAI-compatible endpoint works; point `base_url` at it.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::{CompletionBackend, CompletionRequest, Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Connection settings for the completion service.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
  pub base_url: String,
  pub model:    String,
  /// Without a key every call fails with [`Error::MissingCredential`] and
  /// the proxy falls back to its canned reply.
  pub api_key:  Option<String>,
  pub timeout:  Duration,
}

impl Default for OpenAiConfig {
  fn default() -> Self {
    Self {
      base_url: DEFAULT_BASE_URL.to_owned(),
      model:    DEFAULT_MODEL.to_owned(),
      api_key:  None,
      timeout:  Duration::from_secs(30),
    }
  }
}

/// HTTP client for an OpenAI-compatible chat completions endpoint.
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct OpenAiBackend {
  client: Client,
  config: OpenAiConfig,
}

impl OpenAiBackend {
  pub fn new(config: OpenAiConfig) -> Result<Self> {
    let client = Client::builder().timeout(config.timeout).build()?;
    Ok(Self { client, config })
  }

  pub fn model(&self) -> &str { &self.config.model }

  pub fn has_credential(&self) -> bool { self.config.api_key.is_some() }

  fn url(&self) -> String {
    format!(
      "{}/chat/completions",
      self.config.base_url.trim_end_matches('/')
    )
  }
}

// ─── Wire types ───────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
  model:       &'a str,
  messages:    [WireMessage<'a>; 2],
  max_tokens:  u32,
  temperature: f32,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
  role:    &'static str,
  content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
  #[serde(default)]
  choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
  message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
  content: Option<String>,
}

// ─── Backend ──────────────────────────────────────────────────────────────────

impl CompletionBackend for OpenAiBackend {
  async fn complete(&self, request: &CompletionRequest) -> Result<Option<String>> {
    let api_key = self
      .config
      .api_key
      .as_deref()
      .ok_or(Error::MissingCredential)?;

    let body = ChatRequest {
      model:       &self.config.model,
      messages:    [
        WireMessage { role: "system", content: &request.system },
        WireMessage { role: "user", content: &request.user },
      ],
      max_tokens:  request.max_tokens,
      temperature: request.temperature,
    };

    let resp = self
      .client
      .post(self.url())
      .bearer_auth(api_key)
      .json(&body)
      .send()
      .await?;

    let status = resp.status();
    if status == StatusCode::TOO_MANY_REQUESTS {
      return Err(Error::RateLimited);
    }
    if !status.is_success() {
      let body = resp.text().await.unwrap_or_default();
      return Err(Error::Status {
        status: status.as_u16(),
        body,
      });
    }

    let parsed: ChatResponse = resp.json().await?;
    Ok(
      parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content),
    )
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, header, method, path},
  };

  use super::*;

  fn backend(server: &MockServer, api_key: Option<&str>) -> OpenAiBackend {
    OpenAiBackend::new(OpenAiConfig {
      base_url: format!("{}/v1/", server.uri()),
      api_key: api_key.map(str::to_owned),
      ..OpenAiConfig::default()
    })
    .unwrap()
  }

  fn request() -> CompletionRequest {
    CompletionRequest::new("You are a portfolio assistant.", "What are Kirsi's skills?")
  }

  #[tokio::test]
  async fn sends_system_and_user_turns() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(path("/v1/chat/completions"))
      .and(header("authorization", "Bearer sk-test"))
      .and(body_partial_json(json!({
        "model": "gpt-4o",
        "max_tokens": 300,
        "temperature": 0.7,
        "messages": [
          { "role": "system", "content": "You are a portfolio assistant." },
          { "role": "user", "content": "What are Kirsi's skills?" }
        ]
      })))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "choices": [ { "message": { "role": "assistant", "content": "Research and design." } } ]
      })))
      .expect(1)
      .mount(&server)
      .await;

    let text = backend(&server, Some("sk-test"))
      .complete(&request())
      .await
      .unwrap();
    assert_eq!(text.as_deref(), Some("Research and design."));
  }

  #[tokio::test]
  async fn no_choices_is_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(path("/v1/chat/completions"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
      .mount(&server)
      .await;

    let text = backend(&server, Some("sk-test"))
      .complete(&request())
      .await
      .unwrap();
    assert!(text.is_none());
  }

  #[tokio::test]
  async fn null_content_is_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(path("/v1/chat/completions"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "choices": [ { "message": { "content": null } } ]
      })))
      .mount(&server)
      .await;

    let text = backend(&server, Some("sk-test"))
      .complete(&request())
      .await
      .unwrap();
    assert!(text.is_none());
  }

  #[tokio::test]
  async fn server_error_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(path("/v1/chat/completions"))
      .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
      .mount(&server)
      .await;

    let err = backend(&server, Some("sk-bad"))
      .complete(&request())
      .await
      .unwrap_err();
    match err {
      Error::Status { status, body } => {
        assert_eq!(status, 401);
        assert_eq!(body, "invalid api key");
      }
      other => panic!("unexpected error: {other}"),
    }
  }

  #[tokio::test]
  async fn too_many_requests_is_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .respond_with(ResponseTemplate::new(429))
      .mount(&server)
      .await;

    let err = backend(&server, Some("sk-test"))
      .complete(&request())
      .await
      .unwrap_err();
    assert!(matches!(err, Error::RateLimited));
  }

  #[tokio::test]
  async fn malformed_body_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
      .mount(&server)
      .await;

    let err = backend(&server, Some("sk-test"))
      .complete(&request())
      .await
      .unwrap_err();
    assert!(matches!(err, Error::Http(_)));
  }

  #[tokio::test]
  async fn missing_key_never_calls_the_service() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .respond_with(ResponseTemplate::new(200))
      .expect(0)
      .mount(&server)
      .await;

    let err = backend(&server, None).complete(&request()).await.unwrap_err();
    assert!(matches!(err, Error::MissingCredential));
  }
}
