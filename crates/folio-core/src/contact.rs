//! Contact-form submissions. Append-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Id;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
  pub id:         Id,
  pub name:       String,
  pub email:      String,
  /// Always present in JSON; `null` when the sender left it out.
  pub company:    Option<String>,
  pub message:    String,
  /// Server-assigned; never accepted from callers.
  pub created_at: DateTime<Utc>,
}

/// Input to [`crate::store::PortfolioStore::create_contact`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
  pub name:    String,
  pub email:   String,
  pub company: Option<String>,
  pub message: String,
}

impl NewContact {
  /// The company as it should be stored: a blank value counts as absent.
  pub fn normalized_company(&self) -> Option<String> {
    self.company.clone().filter(|c| !c.is_empty())
  }
}
