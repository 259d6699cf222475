//! Error type for `folio-assistant`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("no completion API key configured")]
  MissingCredential,

  #[error("http error: {0}")]
  Http(#[from] reqwest::Error),

  #[error("completion service returned {status}: {body}")]
  Status { status: u16, body: String },

  #[error("completion service rate limited the request")]
  RateLimited,

  #[error("failed to read prompt file {path:?}: {source}")]
  PromptRead {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("system prompt is empty")]
  EmptyPrompt,

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
