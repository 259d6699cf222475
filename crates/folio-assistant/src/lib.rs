//! The portfolio chat assistant.
//!
//! [`ChatProxy`] pairs a user's message with the owner's [`SystemPrompt`],
//! asks a [`CompletionBackend`] for an answer, and appends the exchange to
//! the store's chat log. Upstream failures never reach the caller: they are
//! logged and replaced by a canned reply pointing at the owner's email.

pub mod completion;
pub mod error;
pub mod openai;
pub mod prompt;
pub mod proxy;

pub use completion::{CompletionBackend, CompletionRequest};
pub use error::{Error, Result};
pub use openai::{OpenAiBackend, OpenAiConfig};
pub use prompt::SystemPrompt;
pub use proxy::{ChatExchange, ChatProxy, ChatReply};
