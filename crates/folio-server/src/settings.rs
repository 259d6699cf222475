//! Runtime configuration, layered from an optional TOML file and `FOLIO_*`
//! environment variables.

use std::{path::PathBuf, time::Duration};

use folio_assistant::{OpenAiConfig, openai};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:        String,
  #[serde(default = "default_port")]
  pub port:        u16,
  /// Portfolio records to load instead of the built-in set.
  #[serde(default)]
  pub seed_path:   Option<PathBuf>,
  /// Assistant prompt to load instead of the built-in one.
  #[serde(default)]
  pub prompt_path: Option<PathBuf>,
  #[serde(default)]
  pub openai:      OpenAiSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OpenAiSettings {
  pub base_url:     String,
  pub model:        String,
  pub api_key:      Option<String>,
  pub timeout_secs: u64,
}

impl Default for OpenAiSettings {
  fn default() -> Self {
    Self {
      base_url:     openai::DEFAULT_BASE_URL.to_owned(),
      model:        openai::DEFAULT_MODEL.to_owned(),
      api_key:      None,
      timeout_secs: 30,
    }
  }
}

fn default_host() -> String { "0.0.0.0".to_string() }

fn default_port() -> u16 { 5000 }

impl ServerConfig {
  /// Read `path` (if it exists), then overlay `FOLIO_*` variables; nested
  /// keys use `__`, e.g. `FOLIO_OPENAI__MODEL`.
  pub fn load(path: PathBuf) -> Result<Self, config::ConfigError> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(
        config::Environment::with_prefix("FOLIO")
          .prefix_separator("_")
          .separator("__")
          .try_parsing(true),
      )
      .build()?;
    settings.try_deserialize()
  }

  /// Fill in the API key from `fallback` when the config left it unset.
  pub fn with_api_key_fallback(mut self, fallback: Option<String>) -> Self {
    if self.openai.api_key.as_deref().is_none_or(str::is_empty) {
      self.openai.api_key = fallback.filter(|k| !k.is_empty());
    }
    self
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  pub fn openai_config(&self) -> OpenAiConfig {
    OpenAiConfig {
      base_url: self.openai.base_url.clone(),
      model:    self.openai.model.clone(),
      api_key:  self.openai.api_key.clone(),
      timeout:  Duration::from_secs(self.openai.timeout_secs),
    }
  }
}
