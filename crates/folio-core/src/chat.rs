//! The chat log: one record per exchange with the portfolio assistant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Id;

/// How the stored response came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatOutcome {
  /// The completion service produced the text.
  Answered,
  /// The service replied but with nothing usable; a canned reply was stored.
  Empty,
  /// The service could not be reached or rejected the request; a canned
  /// reply was stored.
  Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
  pub id:         Id,
  pub message:    String,
  pub response:   String,
  pub outcome:    ChatOutcome,
  pub created_at: DateTime<Utc>,
}

/// Input to [`crate::store::PortfolioStore::save_chat_message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChatMessage {
  pub message:  String,
  pub response: String,
  pub outcome:  ChatOutcome,
}
