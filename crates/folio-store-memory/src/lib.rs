//! In-memory backend for the Folio portfolio store.
//!
//! All collections live behind a single [`tokio::sync::RwLock`], so id
//! allocation and insertion happen as one step with respect to every other
//! writer. Nothing is persisted; the store lives as long as the process.

mod store;

pub mod error;
pub mod seed;

pub use error::{Error, Result};
pub use seed::Seed;
pub use store::MemoryStore;
