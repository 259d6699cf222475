//! [`MemoryStore`] is the in-memory implementation of [`PortfolioStore`].

use std::sync::Arc;

use chrono::Utc;
use folio_core::{
  Id,
  chat::{ChatMessage, NewChatMessage},
  contact::{Contact, NewContact},
  id::IdSequence,
  portfolio::{Experience, Project, Skill},
  store::PortfolioStore,
  user::{NewUser, User},
};
use tokio::sync::RwLock;

use crate::{Result, Seed};

// ─── Tables ──────────────────────────────────────────────────────────────────

/// Every collection plus the shared id sequence. Vectors keep insertion
/// order, which is the order every list operation returns.
#[derive(Debug, Default)]
struct Tables {
  ids:           IdSequence,
  users:         Vec<User>,
  projects:      Vec<Project>,
  experiences:   Vec<Experience>,
  skills:        Vec<Skill>,
  contacts:      Vec<Contact>,
  chat_messages: Vec<ChatMessage>,
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Folio store held entirely in process memory.
///
/// Cloning is cheap: clones share the same tables.
#[derive(Clone, Default)]
pub struct MemoryStore {
  tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
  /// An empty store with no seeded records.
  pub fn new() -> Self { Self::default() }

  /// A store populated from `seed`.
  pub fn with_seed(seed: Seed) -> Self {
    let Seed { projects, experiences, skills } = seed;
    tracing::debug!(
      projects = projects.len(),
      experiences = experiences.len(),
      skills = skills.len(),
      "seeding memory store"
    );
    let tables = Tables {
      projects,
      experiences,
      skills,
      ..Tables::default()
    };
    Self { tables: Arc::new(RwLock::new(tables)) }
  }

  /// A store populated with the built-in portfolio.
  pub fn seeded() -> Result<Self> { Ok(Self::with_seed(Seed::builtin()?)) }
}

impl PortfolioStore for MemoryStore {
  type Error = crate::Error;

  // ── Users ─────────────────────────────────────────────────────────────────

  async fn get_user(&self, id: Id) -> Result<Option<User>> {
    let tables = self.tables.read().await;
    Ok(tables.users.iter().find(|u| u.id == id).cloned())
  }

  async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
    let tables = self.tables.read().await;
    Ok(tables.users.iter().find(|u| u.username == username).cloned())
  }

  async fn create_user(&self, input: NewUser) -> Result<User> {
    let mut tables = self.tables.write().await;
    if tables.users.iter().any(|u| u.username == input.username) {
      return Err(folio_core::Error::UsernameTaken(input.username).into());
    }

    let user = User {
      id:       tables.ids.allocate()?,
      username: input.username,
      password: input.password,
    };
    tables.users.push(user.clone());
    tracing::debug!(id = %user.id, "created user");
    Ok(user)
  }

  // ── Portfolio ─────────────────────────────────────────────────────────────

  async fn get_all_projects(&self) -> Result<Vec<Project>> {
    Ok(self.tables.read().await.projects.clone())
  }

  async fn get_projects_by_category(&self, category: &str) -> Result<Vec<Project>> {
    let tables = self.tables.read().await;
    Ok(
      tables
        .projects
        .iter()
        .filter(|p| p.in_category(category))
        .cloned()
        .collect(),
    )
  }

  async fn get_project(&self, id: Id) -> Result<Option<Project>> {
    let tables = self.tables.read().await;
    Ok(tables.projects.iter().find(|p| p.id == id).cloned())
  }

  async fn get_all_experiences(&self) -> Result<Vec<Experience>> {
    Ok(self.tables.read().await.experiences.clone())
  }

  async fn get_all_skills(&self) -> Result<Vec<Skill>> {
    Ok(self.tables.read().await.skills.clone())
  }

  // ── Contacts ──────────────────────────────────────────────────────────────

  async fn create_contact(&self, input: NewContact) -> Result<Contact> {
    let company = input.normalized_company();
    let mut tables = self.tables.write().await;

    let contact = Contact {
      id: tables.ids.allocate()?,
      name: input.name,
      email: input.email,
      company,
      message: input.message,
      created_at: Utc::now(),
    };
    tables.contacts.push(contact.clone());
    tracing::debug!(id = %contact.id, "stored contact submission");
    Ok(contact)
  }

  // ── Chat log ──────────────────────────────────────────────────────────────

  async fn save_chat_message(&self, input: NewChatMessage) -> Result<ChatMessage> {
    let mut tables = self.tables.write().await;

    let record = ChatMessage {
      id:         tables.ids.allocate()?,
      message:    input.message,
      response:   input.response,
      outcome:    input.outcome,
      created_at: Utc::now(),
    };
    tables.chat_messages.push(record.clone());
    tracing::debug!(id = %record.id, outcome = ?record.outcome, "logged chat exchange");
    Ok(record)
  }

  async fn get_chat_history(&self) -> Result<Vec<ChatMessage>> {
    Ok(self.tables.read().await.chat_messages.clone())
  }
}
