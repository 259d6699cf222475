//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every error body has the shape `{"message": "..."}`; form validation
//! failures add an `errors` array naming each offending field.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// One problem with a submitted form, addressed by its JSON path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
  pub path:    Vec<String>,
  pub message: String,
}

impl FieldError {
  pub fn new(path: &[&str], message: impl Into<String>) -> Self {
    Self {
      path:    path.iter().map(|p| (*p).to_owned()).collect(),
      message: message.into(),
    }
  }
}

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(&'static str),

  #[error("bad request: {0}")]
  BadRequest(&'static str),

  #[error("invalid form data ({} field errors)", .0.len())]
  InvalidForm(Vec<FieldError>),

  /// Anything unexpected. `message` is what the client sees; the source is
  /// only logged.
  #[error("{message}: {source}")]
  Internal {
    message: &'static str,
    #[source]
    source:  Box<dyn std::error::Error + Send + Sync>,
  },
}

impl ApiError {
  /// Adapter for `map_err` that wraps any error with a client-facing message.
  pub fn internal<E>(message: &'static str) -> impl FnOnce(E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    move |e| ApiError::Internal {
      message,
      source: Box::new(e),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::NotFound(m) => {
        (StatusCode::NOT_FOUND, Json(json!({ "message": m }))).into_response()
      }
      ApiError::BadRequest(m) => {
        (StatusCode::BAD_REQUEST, Json(json!({ "message": m }))).into_response()
      }
      ApiError::InvalidForm(errors) => (
        StatusCode::BAD_REQUEST,
        Json(json!({ "message": "Invalid form data", "errors": errors })),
      )
        .into_response(),
      ApiError::Internal { message, source } => {
        tracing::error!(error = %source, "{message}");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          Json(json!({ "message": message })),
        )
          .into_response()
      }
    }
  }
}
