//! The `PortfolioStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `folio-store-memory`).
//! Higher layers (`folio-assistant`, `folio-api`) depend on this abstraction,
//! not on any concrete backend.

use std::future::Future;

use crate::{
  Id,
  chat::{ChatMessage, NewChatMessage},
  contact::{Contact, NewContact},
  portfolio::{Experience, Project, Skill},
  user::{NewUser, User},
};

/// Abstraction over a Folio data store backend.
///
/// Seeded collections (projects, experiences, skills) are read-only. Writes
/// are append-only creates; nothing is updated in place or deleted.
///
/// Every create assigns the record a fresh id drawn from a single sequence
/// shared by all record kinds, so a newly returned id is always greater than
/// any id the store has handed out before.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait PortfolioStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Users ─────────────────────────────────────────────────────────────

  /// Retrieve a user by id. Returns `None` if not found.
  fn get_user(
    &self,
    id: Id,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + '_;

  /// Retrieve the first user whose username equals `username` exactly.
  fn get_user_by_username<'a>(
    &'a self,
    username: &'a str,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + 'a;

  /// Create and store a new user. Fails if the username is already taken.
  fn create_user(
    &self,
    input: NewUser,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + '_;

  // ── Portfolio (seeded, read-only) ─────────────────────────────────────

  /// All projects, in seed order.
  fn get_all_projects(
    &self,
  ) -> impl Future<Output = Result<Vec<Project>, Self::Error>> + Send + '_;

  /// Projects whose category equals `category` exactly (case-sensitive),
  /// in seed order.
  fn get_projects_by_category<'a>(
    &'a self,
    category: &'a str,
  ) -> impl Future<Output = Result<Vec<Project>, Self::Error>> + Send + 'a;

  /// Retrieve a project by id. Returns `None` if not found.
  fn get_project(
    &self,
    id: Id,
  ) -> impl Future<Output = Result<Option<Project>, Self::Error>> + Send + '_;

  /// All experiences, in seed order.
  fn get_all_experiences(
    &self,
  ) -> impl Future<Output = Result<Vec<Experience>, Self::Error>> + Send + '_;

  /// All skills, in seed order.
  fn get_all_skills(
    &self,
  ) -> impl Future<Output = Result<Vec<Skill>, Self::Error>> + Send + '_;

  // ── Contacts ──────────────────────────────────────────────────────────

  /// Record a contact-form submission. `created_at` is set by the store and
  /// a missing or blank company is stored as `None`.
  fn create_contact(
    &self,
    input: NewContact,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  // ── Chat log ──────────────────────────────────────────────────────────

  /// Append one exchange to the chat log. `created_at` is set by the store.
  fn save_chat_message(
    &self,
    input: NewChatMessage,
  ) -> impl Future<Output = Result<ChatMessage, Self::Error>> + Send + '_;

  /// The full chat log, oldest first.
  fn get_chat_history(
    &self,
  ) -> impl Future<Output = Result<Vec<ChatMessage>, Self::Error>> + Send + '_;
}
