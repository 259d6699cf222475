//! Record identifiers and the shared sequence that hands them out.
//!
//! Every record created at runtime (users, contacts, chat messages) draws its
//! id from one [`IdSequence`], so ids are unique across the whole store and
//! strictly increasing in creation order regardless of entity kind. Seeded
//! records carry the ids written in the seed document.

use std::{fmt, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A positive integer identifier. Serialised as a bare JSON number.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Id(u64);

impl Id {
  pub const fn new(raw: u64) -> Self { Self(raw) }

  pub const fn get(self) -> u64 { self.0 }
}

impl From<u64> for Id {
  fn from(raw: u64) -> Self { Self(raw) }
}

impl fmt::Display for Id {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl FromStr for Id {
  type Err = ParseIntError;

  fn from_str(s: &str) -> Result<Self, Self::Err> { s.parse().map(Self) }
}

// ─── Sequence ────────────────────────────────────────────────────────────────

/// A monotonically increasing id counter, starting at 1.
///
/// Not synchronised on its own; the owning store must allocate and insert
/// under the same lock.
#[derive(Debug, Clone)]
pub struct IdSequence {
  next: u64,
}

impl IdSequence {
  pub const fn new() -> Self { Self { next: 1 } }

  /// Hand out the next id and advance the counter.
  pub fn allocate(&mut self) -> Result<Id> {
    let id = Id(self.next);
    self.next = self.next.checked_add(1).ok_or(Error::IdSpaceExhausted)?;
    Ok(id)
  }
}

impl Default for IdSequence {
  fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn sequence_starts_at_one_and_increments() {
    let mut seq = IdSequence::new();
    assert_eq!(seq.allocate().unwrap(), Id::new(1));
    assert_eq!(seq.allocate().unwrap(), Id::new(2));
    assert_eq!(seq.next, 3);
  }

  #[test]
  fn sequence_reports_exhaustion() {
    let mut seq = IdSequence { next: u64::MAX };
    assert!(matches!(seq.allocate(), Err(Error::IdSpaceExhausted)));
  }

  #[test]
  fn id_parses_from_path_segment() {
    assert_eq!("42".parse::<Id>().unwrap(), Id::new(42));
    assert!("abc".parse::<Id>().is_err());
    assert!("-1".parse::<Id>().is_err());
  }

  #[test]
  fn id_serialises_as_plain_number() {
    let json = serde_json::to_string(&Id::new(7)).unwrap();
    assert_eq!(json, "7");
  }
}
