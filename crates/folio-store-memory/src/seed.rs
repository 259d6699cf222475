//! Seed data for the read-only portfolio collections.
//!
//! The built-in document is compiled into the binary from
//! `seed/portfolio.json`; deployments can point the server at another file
//! with the same shape to change the portfolio without rebuilding.

use std::{collections::HashSet, path::Path};

use folio_core::{
  Id,
  portfolio::{Experience, Project, Skill},
};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

const BUILTIN_SEED: &str = include_str!("../seed/portfolio.json");

/// The records loaded into a fresh store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seed {
  #[serde(default)]
  pub projects:    Vec<Project>,
  #[serde(default)]
  pub experiences: Vec<Experience>,
  #[serde(default)]
  pub skills:      Vec<Skill>,
}

impl Seed {
  /// The portfolio shipped with the binary.
  pub fn builtin() -> Result<Self> { Self::from_json(BUILTIN_SEED) }

  /// Parse and validate a seed document.
  pub fn from_json(raw: &str) -> Result<Self> {
    let seed: Seed = serde_json::from_str(raw)?;
    seed.validate()?;
    Ok(seed)
  }

  /// Read a seed document from disk.
  pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path)
      .await
      .map_err(|source| Error::SeedRead {
        path: path.to_path_buf(),
        source,
      })?;
    Self::from_json(&raw)
  }

  /// Reject zero or duplicate ids within a collection. Out-of-range skill
  /// percentages are only reported, since the store does not enforce them.
  fn validate(&self) -> Result<()> {
    ensure_unique("project", self.projects.iter().map(|p| p.id))?;
    ensure_unique("experience", self.experiences.iter().map(|e| e.id))?;
    ensure_unique("skill", self.skills.iter().map(|s| s.id))?;

    for skill in self.skills.iter().filter(|s| !s.percentage_in_range()) {
      tracing::warn!(
        skill = %skill.name,
        percentage = skill.percentage,
        "seeded skill percentage outside 0..=100"
      );
    }
    Ok(())
  }
}

fn ensure_unique(
  kind: &'static str,
  ids: impl IntoIterator<Item = Id>,
) -> Result<()> {
  let mut seen = HashSet::new();
  for id in ids {
    if id.get() == 0 {
      return Err(Error::ZeroSeedId { kind });
    }
    if !seen.insert(id) {
      return Err(Error::DuplicateSeedId { kind, id });
    }
  }
  Ok(())
}
