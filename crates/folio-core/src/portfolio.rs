//! The read-only portfolio records: projects, experiences and skills.
//!
//! These collections are populated once from seed data when the store is
//! built and are never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::Id;

/// A case study or piece of work shown in the portfolio grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
  pub id:             Id,
  pub title:          String,
  pub description:    String,
  /// Free-form grouping such as `research`, `design` or `mentor`. Category
  /// filters compare this verbatim, without case folding.
  pub category:       String,
  #[serde(default)]
  pub tags:           Vec<String>,
  pub year:           String,
  pub image_url:      String,
  #[serde(default)]
  pub case_study_url: Option<String>,
}

impl Project {
  pub fn in_category(&self, category: &str) -> bool {
    self.category == category
  }
}

/// A position held, as listed on the experience timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
  pub id:          Id,
  pub position:    String,
  pub company:     String,
  /// Human-readable date range, e.g. "Jun 2021 - Present".
  pub period:      String,
  pub description: String,
  /// Marks the ongoing role.
  #[serde(default)]
  pub current:     bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
  pub id:         Id,
  pub name:       String,
  /// Proficiency on a 0–100 scale. Not enforced by the store.
  pub percentage: i32,
}

impl Skill {
  pub fn percentage_in_range(&self) -> bool {
    (0..=100).contains(&self.percentage)
  }
}
