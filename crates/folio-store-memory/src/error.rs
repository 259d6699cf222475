//! Error type for `folio-store-memory`.

use std::path::PathBuf;

use folio_core::Id;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] folio_core::Error),

  #[error("failed to read seed file {path:?}: {source}")]
  SeedRead {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("malformed seed data: {0}")]
  SeedParse(#[from] serde_json::Error),

  /// Two seeded records of the same kind share an id.
  #[error("duplicate {kind} id in seed data: {id}")]
  DuplicateSeedId { kind: &'static str, id: Id },

  /// Ids start at 1; a seeded record may not use 0.
  #[error("{kind} in seed data has id 0")]
  ZeroSeedId { kind: &'static str },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
