//! Handler for `POST /chat`.

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
};
use folio_assistant::CompletionBackend;
use folio_core::store::PortfolioStore;
use serde::Serialize;
use serde_json::Value;

use crate::{ApiState, error::ApiError};

#[derive(Debug, Serialize)]
pub struct ChatResponse {
  pub response: String,
}

/// `POST /chat`, body: `{"message":"..."}`
///
/// Always answers 200 once the message is accepted, even when the
/// completion service is down; the reply is then the canned fallback.
pub async fn handler<S, B>(
  State(state): State<ApiState<S, B>>,
  body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError>
where
  S: PortfolioStore + 'static,
  B: CompletionBackend + 'static,
{
  let message = body
    .ok()
    .and_then(|Json(body)| match body.get("message") {
      Some(Value::String(m)) if !m.is_empty() => Some(m.clone()),
      _ => None,
    })
    .ok_or(ApiError::BadRequest("Message is required"))?;

  let exchange = state
    .assistant
    .answer(&message)
    .await
    .map_err(ApiError::internal("Failed to process chat message"))?;

  Ok(Json(ChatResponse {
    response: exchange.reply.text().to_owned(),
  }))
}
