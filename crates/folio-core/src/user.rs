//! User accounts. Nothing else in the store references them.

use serde::{Deserialize, Serialize};

use crate::Id;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  pub id:       Id,
  /// Unique across all users; compared by exact equality.
  pub username: String,
  /// Stored as given. The store never interprets it.
  pub password: String,
}

/// Input to [`crate::store::PortfolioStore::create_user`].
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
  pub username: String,
  pub password: String,
}
