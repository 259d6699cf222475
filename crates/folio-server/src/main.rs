//! folio server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), seeds an
//! in-memory store, and serves the portfolio JSON API over HTTP.
//!
//! ```text
//! OPENAI_API_KEY=sk-... cargo run -p folio-server -- --config config.toml
//! ```

mod settings;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use folio_api::ApiState;
use folio_assistant::{ChatProxy, OpenAiBackend, SystemPrompt};
use folio_store_memory::{MemoryStore, Seed};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::settings::ServerConfig;

#[derive(Parser)]
#[command(author, version, about = "Portfolio site API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let server_cfg = ServerConfig::load(cli.config)
    .context("failed to read configuration")?
    .with_api_key_fallback(std::env::var("OPENAI_API_KEY").ok());

  // Seed the store.
  let seed = match &server_cfg.seed_path {
    Some(path) => Seed::from_path(path)
      .await
      .with_context(|| format!("failed to load seed data from {path:?}"))?,
    None => Seed::builtin().context("built-in seed data is invalid")?,
  };
  let store = Arc::new(MemoryStore::with_seed(seed));

  // Build the assistant.
  let prompt = match &server_cfg.prompt_path {
    Some(path) => SystemPrompt::from_path(path)
      .await
      .with_context(|| format!("failed to load system prompt from {path:?}"))?,
    None => SystemPrompt::builtin(),
  };
  let backend = OpenAiBackend::new(server_cfg.openai_config())
    .context("failed to build completion client")?;
  if !backend.has_credential() {
    tracing::warn!("no OpenAI API key configured; chat will answer with the fallback reply");
  }
  tracing::info!(model = backend.model(), "chat assistant ready");

  let state = ApiState::new(
    Arc::clone(&store),
    ChatProxy::new(store, backend, prompt),
  );
  let app = folio_api::app(state).layer(TraceLayer::new_for_http());
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
