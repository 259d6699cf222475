//! JSON REST API for Folio.
//!
//! Exposes an axum [`Router`] backed by any
//! [`folio_core::store::PortfolioStore`] and any
//! [`folio_assistant::CompletionBackend`]. TLS, static assets and request
//! tracing are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = folio_api::app(state).layer(TraceLayer::new_for_http());
//! ```

pub mod chat;
pub mod contact;
pub mod error;
pub mod portfolio;

use std::sync::Arc;

use axum::{
  Json, Router,
  routing::{get, post},
};
use folio_assistant::{ChatProxy, CompletionBackend};
use folio_core::store::PortfolioStore;
use serde_json::{Value, json};

pub use error::{ApiError, FieldError};

/// Shared state threaded through all handlers.
pub struct ApiState<S, B> {
  pub store:     Arc<S>,
  pub assistant: Arc<ChatProxy<S, B>>,
}

impl<S, B> ApiState<S, B>
where
  S: PortfolioStore,
  B: CompletionBackend,
{
  /// Build state whose assistant logs into the same `store`.
  pub fn new(store: Arc<S>, assistant: ChatProxy<S, B>) -> Self {
    Self {
      store,
      assistant: Arc::new(assistant),
    }
  }
}

impl<S, B> Clone for ApiState<S, B> {
  fn clone(&self) -> Self {
    Self {
      store:     Arc::clone(&self.store),
      assistant: Arc::clone(&self.assistant),
    }
  }
}

/// The full HTTP surface: `/health` plus every endpoint under `/api`.
pub fn app<S, B>(state: ApiState<S, B>) -> Router<()>
where
  S: PortfolioStore + 'static,
  B: CompletionBackend + 'static,
{
  Router::new()
    .route("/health", get(health))
    .nest("/api", api_router(state))
}

/// Build the API router for `state`, with paths relative to the mount
/// point.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S, B>(state: ApiState<S, B>) -> Router<()>
where
  S: PortfolioStore + 'static,
  B: CompletionBackend + 'static,
{
  Router::new()
    // Portfolio
    .route("/projects", get(portfolio::list_projects::<S, B>))
    .route(
      "/projects/category/{category}",
      get(portfolio::projects_by_category::<S, B>),
    )
    .route("/projects/{id}", get(portfolio::get_project::<S, B>))
    .route("/experiences", get(portfolio::list_experiences::<S, B>))
    .route("/skills", get(portfolio::list_skills::<S, B>))
    // Writes
    .route("/contact", post(contact::submit::<S, B>))
    .route("/chat", post(chat::handler::<S, B>))
    .with_state(state)
}

/// `GET /health`: liveness only; touches nothing.
pub async fn health() -> Json<Value> { Json(json!({ "status": "ok" })) }
