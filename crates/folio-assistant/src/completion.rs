//! The seam between the chat proxy and whatever produces the text.

use std::future::Future;

use crate::Result;

/// Largest completion the assistant asks for, in tokens.
pub const MAX_TOKENS: u32 = 300;

/// Sampling temperature: varied phrasing that stays close to the prompt.
pub const TEMPERATURE: f32 = 0.7;

/// One single-turn completion: the system prompt plus the user's message.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
  pub system:      String,
  pub user:        String,
  pub max_tokens:  u32,
  pub temperature: f32,
}

impl CompletionRequest {
  /// A request with the assistant's fixed length and temperature.
  pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
    Self {
      system:      system.into(),
      user:        user.into(),
      max_tokens:  MAX_TOKENS,
      temperature: TEMPERATURE,
    }
  }
}

/// A generative text service.
///
/// `Ok(None)` means the service answered but produced no text. Every other
/// failure (transport, auth, quota, malformed body) is an `Err`. A backend
/// makes exactly one attempt per call.
pub trait CompletionBackend: Send + Sync {
  fn complete<'a>(
    &'a self,
    request: &'a CompletionRequest,
  ) -> impl Future<Output = Result<Option<String>>> + Send + 'a;
}
