//! The system prompt that tells the model who the portfolio owner is.
//!
//! The default text ships in `prompts/portfolio.md`; a deployment can point
//! the server at a replacement file so the assistant's knowledge can change
//! without a rebuild.

use std::path::Path;

use crate::{Error, Result};

const BUILTIN_PROMPT: &str = include_str!("../prompts/portfolio.md");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemPrompt(String);

impl SystemPrompt {
  pub fn builtin() -> Self { Self(BUILTIN_PROMPT.trim().to_owned()) }

  /// Wrap `text`, rejecting prompts that are blank.
  pub fn new(text: impl Into<String>) -> Result<Self> {
    let text = text.into();
    let trimmed = text.trim();
    if trimmed.is_empty() {
      return Err(Error::EmptyPrompt);
    }
    Ok(Self(trimmed.to_owned()))
  }

  pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path)
      .await
      .map_err(|source| Error::PromptRead {
        path: path.to_path_buf(),
        source,
      })?;
    Self::new(text)
  }

  pub fn as_str(&self) -> &str { &self.0 }
}
